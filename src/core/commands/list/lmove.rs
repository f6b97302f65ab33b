// src/core/commands/list/lmove.rs

//! Implements the `LMOVE` command.

use crate::core::CommandError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ParseCommand};
use crate::core::commands::helpers::{IntoArg, extract_str, validate_arg_count};
use bytes::Bytes;

/// Defines the end of a list an element is taken from or pushed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    pub fn as_token(self) -> Bytes {
        match self {
            Side::Left => Bytes::from_static(b"LEFT"),
            Side::Right => Bytes::from_static(b"RIGHT"),
        }
    }

    pub(crate) fn parse(token: &Bytes) -> Result<Self, CommandError> {
        match extract_str(token)?.to_ascii_lowercase().as_str() {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            _ => Err(CommandError::SyntaxError),
        }
    }
}

/// Represents `LMOVE source destination LEFT|RIGHT LEFT|RIGHT`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LMove {
    pub source: Bytes,
    pub destination: Bytes,
    pub from: Side,
    pub to: Side,
}

impl LMove {
    pub fn new(source: impl IntoArg, destination: impl IntoArg, from: Side, to: Side) -> Self {
        Self {
            source: source.into_arg(),
            destination: destination.into_arg(),
            from,
            to,
        }
    }
}

impl ParseCommand for LMove {
    fn parse(args: &[Bytes]) -> Result<Self, CommandError> {
        validate_arg_count(args, 4, "LMOVE")?;
        Ok(LMove {
            source: args[0].clone(),
            destination: args[1].clone(),
            from: Side::parse(&args[2])?,
            to: Side::parse(&args[3])?,
        })
    }
}

impl CommandSpec for LMove {
    fn name(&self) -> &'static str {
        "lmove"
    }
    fn arity(&self) -> i64 {
        5
    }
    fn flags(&self) -> CommandFlags {
        CommandFlags::WRITE | CommandFlags::DENY_OOM
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.source.clone(), self.destination.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.source.clone(),
            self.destination.clone(),
            self.from.as_token(),
            self.to.as_token(),
        ]
    }
}
