//! Line protocol spoken over the slider's control socket.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SOCKET_PATH: &str = "/tmp/slider.sock";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    /// Zero-based card index, routed exactly like a dot click.
    Goto(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'goto' expects a card index, got '{0}'")]
    BadIndex(String),
    #[error("'goto' takes exactly one argument")]
    WrongArgCount,
}

impl FromStr for ControlCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(ParseCommandError::Empty)?;

        match verb.to_ascii_lowercase().as_str() {
            "goto" => {
                let arg = words.next().ok_or(ParseCommandError::WrongArgCount)?;
                if words.next().is_some() {
                    return Err(ParseCommandError::WrongArgCount);
                }
                arg.parse()
                    .map(Self::Goto)
                    .map_err(|_| ParseCommandError::BadIndex(arg.to_string()))
            }
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Goto(index) => write!(f, "goto {}", index),
        }
    }
}
