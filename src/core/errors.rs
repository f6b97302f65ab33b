// src/core/errors.rs

//! Defines the error type raised while building or re-parsing list commands.

use thiserror::Error;

/// Failures that can occur locally, before a command ever reaches the store.
///
/// Building a command only fails when a timeout cannot be turned into a valid
/// seconds token. The remaining variants are produced when a token sequence is
/// parsed back into a typed command. Transport and store errors are never
/// represented here; they belong to the [`Run`](crate::core::client::Run)
/// implementation and are returned to the caller untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("timeout is not finite: {0}")]
    NonFiniteTimeout(f64),

    #[error("timeout is not a valid float: '{0}'")]
    InvalidTimeout(String),

    #[error("Empty command")]
    EmptyCommand,

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Wrong number of arguments for '{0}' command")]
    WrongArgumentCount(String),

    #[error("Value is not an integer or out of range")]
    NotAnInteger,

    #[error("Syntax error")]
    SyntaxError,
}

impl From<std::num::ParseIntError> for CommandError {
    fn from(_: std::num::ParseIntError) -> Self {
        CommandError::NotAnInteger
    }
}

impl From<std::str::Utf8Error> for CommandError {
    fn from(_: std::str::Utf8Error) -> Self {
        CommandError::SyntaxError
    }
}
