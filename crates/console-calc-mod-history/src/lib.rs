/// Undo/redo history for calculator sessions.
///
/// Provides a `History` that owns the session's accumulator, runs
/// operations against it and keeps executed operations on an undo stack
/// and undone ones on a redo stack.
pub mod format;
pub mod manager;

pub use format::LogFormat;
pub use manager::History;
