/// Core calculator state: the accumulator register, value snapshots,
/// and reversible arithmetic operations.
///
/// Operations don't hold on to the accumulator. They are bound to it at
/// execution time, which keeps ownership with whoever drives the session
/// (normally the history log).
pub mod accumulator;
pub mod error;
pub mod operation;

pub use accumulator::{Accumulator, Snapshot};
pub use error::CalcError;
pub use operation::{Operation, Transform};
