//! The undo/redo log.
//!
//! Executed operations sit on the undo stack, oldest first. Undoing moves
//! the top operation to the redo stack; any newly run operation discards
//! the redo stack entirely.

use console_calc_core::{Accumulator, CalcError, Operation};

use crate::format::{LogFormat, LOG_HEADING};

/// Runs operations against the session's accumulator and keeps the
/// undo/redo stacks.
///
/// Invariant: replaying the undo stack in order from the initial value
/// reproduces the current accumulator value.
#[derive(Debug, Default)]
pub struct History {
    acc: Accumulator,
    /// Executed operations, most recent last.
    undo_stack: Vec<Operation>,
    /// Undone operations, most recently undone last.
    redo_stack: Vec<Operation>,
}

impl History {
    /// Creates an empty history over an accumulator holding zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history over an existing accumulator.
    pub fn with_accumulator(acc: Accumulator) -> Self {
        Self {
            acc,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.acc
    }

    /// Current accumulator value.
    pub fn value(&self) -> f64 {
        self.acc.value()
    }

    /// Executes `op` and records it.
    ///
    /// On success the operation is pushed onto the undo stack and the redo
    /// stack is cleared.
    ///
    /// # Errors
    ///
    /// Propagates the operation's failure. The operation is dropped and
    /// neither stack nor the accumulator changes.
    pub fn run(&mut self, mut op: Operation) -> Result<(), CalcError> {
        op.execute(&mut self.acc)?;
        self.undo_stack.push(op);
        self.redo_stack.clear();
        Ok(())
    }

    /// Undoes the most recent operation.
    ///
    /// Returns the undone operation, or `None` if there's nothing to undo.
    pub fn undo(&mut self) -> Option<&Operation> {
        let op = self.undo_stack.pop()?;
        op.undo(&mut self.acc);
        self.redo_stack.push(op);
        self.redo_stack.last()
    }

    /// Re-executes the most recently undone operation.
    ///
    /// The operation re-snapshots the accumulator as it is now. Returns the
    /// redone operation, or `None` if there's nothing to redo.
    pub fn redo(&mut self) -> Option<&Operation> {
        let mut op = self.redo_stack.pop()?;
        if op.execute(&mut self.acc).is_err() {
            // Only reachable if the operation failed on its first run, which
            // `run` never records. Keep it where it was.
            self.redo_stack.push(op);
            return None;
        }
        self.undo_stack.push(op);
        self.undo_stack.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Iterates the undo stack, most recent first.
    pub fn undo_entries(&self) -> impl Iterator<Item = &Operation> + '_ {
        self.undo_stack.iter().rev()
    }

    /// Renders the undo stack most recent first, one `- <label> [<time>]`
    /// line per entry under a heading.
    ///
    /// Returns `None` when there is nothing to show.
    pub fn render_undo_log(&self, format: &LogFormat) -> Option<String> {
        if self.undo_stack.is_empty() {
            return None;
        }

        let shown = match format.max_entries {
            0 => self.undo_stack.len(),
            n => n.min(self.undo_stack.len()),
        };

        let mut out = String::from(LOG_HEADING);
        out.push('\n');
        for op in self.undo_entries().take(shown) {
            format.write_entry(&mut out, op);
        }

        let hidden = self.undo_stack.len() - shown;
        if hidden > 0 {
            out.push_str(&format!("... ({hidden} older)\n"));
        }
        Some(out)
    }
}
