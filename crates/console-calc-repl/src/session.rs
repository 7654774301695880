//! The read-dispatch-print loop.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use console_calc_config::AppConfig;
use console_calc_core::Operation;
use console_calc_mod_history::{History, LogFormat};

use crate::command::{parse_command, Command, InputError};
use crate::text::{help_text, BANNER, EMPTY_HISTORY, FAREWELL, USAGE};

/// Whether the loop should keep reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One interactive calculator session.
///
/// Owns the history (and through it the accumulator) for as long as the
/// session lives. Nothing is shared between sessions.
pub struct Session<R, W> {
    history: History,
    config: AppConfig,
    log_format: LogFormat,
    input: R,
    output: W,
}

impl<R, W> std::fmt::Debug for Session<R, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("history", &self.history)
            .field("config", &self.config)
            .finish()
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: AppConfig, input: R, output: W) -> Self {
        let log_format = LogFormat::from(&config);
        Self {
            history: History::new(),
            config,
            log_format,
            input,
            output,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the loop until `exit`/`quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        if self.config.show_banner {
            writeln!(self.output, "{BANNER}\n")?;
        }

        let mut line = String::new();
        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush().context("Failed to flush output")?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read input")?;
            if read == 0 {
                tracing::debug!("End of input");
                writeln!(self.output)?;
                break;
            }

            if self.execute_line(&line)? == Flow::Exit {
                break;
            }
        }

        writeln!(self.output, "{FAREWELL}")?;
        Ok(())
    }

    /// Parses and dispatches a single line, printing the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing output fails.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        match parse_command(line) {
            Ok(Some(command)) => self.dispatch(command),
            Ok(None) => Ok(Flow::Continue),
            Err(e) => {
                tracing::debug!("Rejected input {:?}: {e}", line.trim());
                self.report_input_error(&e)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow> {
        tracing::debug!(?command, "Dispatching");

        match command {
            Command::Add(n) => self.run_operation(Operation::add(n), "OK")?,
            Command::Sub(n) => self.run_operation(Operation::subtract(n), "OK")?,
            Command::Mul(n) => self.run_operation(Operation::multiply(n), "OK")?,
            Command::Div(n) => self.run_operation(Operation::divide(n), "OK")?,
            Command::Clear => self.run_operation(Operation::clear(), "Cleared")?,
            Command::Undo => match self.history.undo().map(|op| op.label().to_string()) {
                Some(label) => {
                    writeln!(self.output, "Undid {label}. Value = {}", self.history.value())?
                }
                None => writeln!(self.output, "Nothing to undo.")?,
            },
            Command::Redo => match self.history.redo().map(|op| op.label().to_string()) {
                Some(label) => {
                    writeln!(self.output, "Redid {label}. Value = {}", self.history.value())?
                }
                None => writeln!(self.output, "Nothing to redo.")?,
            },
            Command::Value => writeln!(self.output, "Value = {}", self.history.value())?,
            Command::History => match self.history.render_undo_log(&self.log_format) {
                Some(log) => write!(self.output, "{log}")?,
                None => writeln!(self.output, "{EMPTY_HISTORY}")?,
            },
            Command::Help => write!(self.output, "{}", help_text())?,
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn run_operation(&mut self, op: Operation, prefix: &str) -> Result<()> {
        match self.history.run(op) {
            Ok(()) => writeln!(self.output, "{prefix}. Value = {}", self.history.value())?,
            Err(e) => {
                tracing::debug!("Operation failed: {e}");
                writeln!(self.output, "Error: {e}")?;
            }
        }
        Ok(())
    }

    fn report_input_error(&mut self, e: &InputError) -> Result<()> {
        match e {
            InputError::UnknownCommand(keyword) => {
                writeln!(self.output, "Unknown command '{keyword}'. Type 'help'.")?
            }
            _ => writeln!(self.output, "Error: {e}\n{USAGE}")?,
        }
        Ok(())
    }
}
