//! Command parsing.

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Add(f64),
    Sub(f64),
    Mul(f64),
    Div(f64),
    Clear,
    Undo,
    Redo,
    /// Show the current value.
    Value,
    /// Show the undo log.
    History,
    Help,
    Exit,
}

/// Malformed input. Never reaches the calculator core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("missing operand")]
    MissingOperand,

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),
}

/// Parses one line of input.
///
/// The first whitespace-separated token is the keyword (case-insensitive);
/// arithmetic keywords take the second token as operand. Extra tokens are
/// ignored. Returns `Ok(None)` for a blank line.
///
/// # Errors
///
/// Returns an `InputError` for unknown keywords and missing or
/// unparseable operands.
pub fn parse_command(line: &str) -> Result<Option<Command>, InputError> {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(None);
    };

    let command = match keyword.to_lowercase().as_str() {
        "+" | "add" => Command::Add(operand(tokens.next())?),
        "-" | "sub" => Command::Sub(operand(tokens.next())?),
        "*" | "mul" => Command::Mul(operand(tokens.next())?),
        "/" | "div" => Command::Div(operand(tokens.next())?),
        "clear" => Command::Clear,
        "undo" => Command::Undo,
        "redo" => Command::Redo,
        "val" => Command::Value,
        "hist" => Command::History,
        "help" => Command::Help,
        "exit" | "quit" => Command::Exit,
        _ => return Err(InputError::UnknownCommand(keyword.to_string())),
    };
    Ok(Some(command))
}

fn operand(token: Option<&str>) -> Result<f64, InputError> {
    let token = token.ok_or(InputError::MissingOperand)?;
    token
        .parse::<f64>()
        .map_err(|_| InputError::InvalidNumber(token.to_string()))
}
