//! Errors raised by the calculator core.

/// Failure of an operation's execution.
///
/// Failures are transactional: the accumulator is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
}
