/// Interactive front end for the calculator.
///
/// Turns lines of text into commands, dispatches them to a `History`, and
/// prints results. All I/O goes through generic readers/writers so sessions
/// can be driven from tests.
pub mod command;
pub mod session;
pub mod text;

pub use command::{parse_command, Command, InputError};
pub use session::{Flow, Session};
