//! Fixed text shown to the user.

pub const BANNER: &str = "Calc (undo/redo) - type 'help' for commands.";

pub const USAGE: &str = "Usage: '+ 5', '* 3', '/ 2', 'clear', 'undo', 'redo', 'val'.";

pub const EMPTY_HISTORY: &str = "(history empty)";

pub const FAREWELL: &str = "Bye!";

/// Lists every command with a short description.
pub fn help_text() -> &'static str {
    "Commands:
  + n     | add n
  - n     | sub n
  * n     | mul n
  / n     | div n
  clear   | set the value to 0
  undo    | undo the last operation
  redo    | redo the last undone operation
  val     | show the current value
  hist    | show history (most recent first)
  help    | show this help
  exit    | quit (also: quit)
"
}
