//! Reversible arithmetic operations.
use std::fmt;

use chrono::{DateTime, Utc};

use crate::accumulator::{Accumulator, Snapshot};
use crate::error::CalcError;

/// The arithmetic an operation applies, with its operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Add(f64),
    Subtract(f64),
    Multiply(f64),
    Divide(f64),
    /// Resets the value to zero.
    Clear,
}

impl Transform {
    /// Returns the operand, or `None` for `Clear`.
    pub fn operand(&self) -> Option<f64> {
        match *self {
            Transform::Add(n)
            | Transform::Subtract(n)
            | Transform::Multiply(n)
            | Transform::Divide(n) => Some(n),
            Transform::Clear => None,
        }
    }

    /// Applies the transform to `value`.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::DivisionByZero` for a `Divide(0.0)`.
    pub fn apply(&self, value: f64) -> Result<f64, CalcError> {
        match *self {
            Transform::Add(n) => Ok(value + n),
            Transform::Subtract(n) => Ok(value - n),
            Transform::Multiply(n) => Ok(value * n),
            Transform::Divide(n) if n == 0.0 => Err(CalcError::DivisionByZero),
            Transform::Divide(n) => Ok(value / n),
            Transform::Clear => Ok(0.0),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Add(n) => write!(f, "Add {n}"),
            Transform::Subtract(n) => write!(f, "Sub {n}"),
            Transform::Multiply(n) => write!(f, "Mul {n}"),
            Transform::Divide(n) => write!(f, "Div {n}"),
            Transform::Clear => f.write_str("Clear"),
        }
    }
}

/// A unit of work on the accumulator that can be undone.
///
/// Every execution snapshots the accumulator before mutating it, so the
/// operation can later put the value back. Label and timestamp are fixed
/// at construction.
#[derive(Debug, Clone)]
pub struct Operation {
    transform: Transform,
    label: String,
    timestamp: DateTime<Utc>,
    /// Accumulator state before the most recent execution.
    backup: Option<Snapshot>,
}

impl Operation {
    /// Creates an unexecuted operation for `transform`.
    pub fn new(transform: Transform) -> Self {
        Self {
            transform,
            label: transform.to_string(),
            timestamp: Utc::now(),
            backup: None,
        }
    }

    pub fn add(operand: f64) -> Self {
        Self::new(Transform::Add(operand))
    }

    pub fn subtract(operand: f64) -> Self {
        Self::new(Transform::Subtract(operand))
    }

    pub fn multiply(operand: f64) -> Self {
        Self::new(Transform::Multiply(operand))
    }

    pub fn divide(operand: f64) -> Self {
        Self::new(Transform::Divide(operand))
    }

    pub fn clear() -> Self {
        Self::new(Transform::Clear)
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn operand(&self) -> Option<f64> {
        self.transform.operand()
    }

    /// Human-readable label, e.g. `Add 5`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// When the operation was created.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The snapshot taken by the last execution, if any.
    pub fn backup(&self) -> Option<Snapshot> {
        self.backup
    }

    /// Snapshots `acc`, then applies the transform to it.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::DivisionByZero` when dividing by zero. The
    /// accumulator is not modified in that case.
    pub fn execute(&mut self, acc: &mut Accumulator) -> Result<(), CalcError> {
        self.backup = Some(acc.save());
        let value = self.transform.apply(acc.value())?;
        acc.set_value(value);
        Ok(())
    }

    /// Restores `acc` from the stored snapshot. No-op if never executed.
    pub fn undo(&self, acc: &mut Accumulator) {
        if let Some(backup) = &self.backup {
            acc.restore(backup);
        }
    }
}
