//! Line-oriented interactive screen session
//!
//! Each input line is one UI event. Lines are parsed into [`Command`]s,
//! forwarded to the [`Screen`] as messages, and the screen is re-rendered
//! after every event.

use std::io::{self, BufRead, Write};

use passfield_shared::logging::sanitize_log_message;
use passfield_shared::{Screen, ScreenMessage};
use thiserror::Error;
use tracing::{debug, warn};

use crate::render::render_screen;

/// Help text listing the session commands
pub const HELP: &str = "\
commands:
  error <text>     set the standard field's error text (empty clears it)
  message <text>   set the message shown next to both titles
  input <text>     set the standard field value
  password <text>  set the password value
  validate         press the validate button
  show             render the screen again
  help             show this help
  quit             leave the screen";

/// A parsed session line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(ScreenMessage),
    Show,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("'{0}' takes no argument")]
    UnexpectedArgument(String),
}

/// Parse one input line
///
/// Everything after the first space following the command name is the
/// argument, taken verbatim so values may contain spaces. Commands that take
/// no argument accept trailing whitespace. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_start().trim_end_matches(&['\r', '\n'][..]);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (name, argument) = match line.split_once(' ') {
        Some((name, argument)) => (name, Some(argument)),
        None => (line, None),
    };
    let text = || argument.unwrap_or_default().to_string();
    let bare = |command: Command| match argument.filter(|a| !a.trim().is_empty()) {
        Some(_) => Err(CommandError::UnexpectedArgument(name.to_string())),
        None => Ok(command),
    };

    let command = match name {
        "error" => Command::Event(ScreenMessage::ErrorTextChanged(text())),
        "message" => Command::Event(ScreenMessage::MessageChanged(text())),
        "input" => Command::Event(ScreenMessage::InputChanged(text())),
        "password" => Command::Event(ScreenMessage::PasswordChanged(text())),
        "validate" => bare(Command::Event(ScreenMessage::ValidatePressed))?,
        "show" => bare(Command::Show)?,
        "help" => bare(Command::Help)?,
        "quit" | "exit" => bare(Command::Quit)?,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

/// Run a session until `quit` or end of input
pub fn run_session<R, W>(screen: &mut Screen, input: R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", render_screen(&screen.render()))?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Event(message))) => {
                screen.update(message);
                write!(output, "{}", render_screen(&screen.render()))?;
            }
            Ok(Some(Command::Show)) => {
                write!(output, "{}", render_screen(&screen.render()))?;
            }
            Ok(Some(Command::Help)) => {
                writeln!(output, "{HELP}")?;
            }
            Ok(Some(Command::Quit)) => {
                debug!("Session ended by quit command");
                break;
            }
            Err(e) => {
                warn!("Rejected session input: {}", sanitize_log_message(&e.to_string()));
                writeln!(output, "{e}")?;
            }
        }
        output.flush()?;
    }

    Ok(())
}
