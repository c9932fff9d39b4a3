//! Error types for command dispatch

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("command name is reserved: {0}")]
    ReservedName(String),

    #[error("invalid arguments for command `{0}`")]
    InvalidArguments(String),

    #[error("command action failed: {0}")]
    ActionFailed(String),
}

pub type Result<T> = std::result::Result<T, CommandError>;
