// src/core/commands/list/rpoplpush.rs

use crate::core::CommandError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ParseCommand};
use crate::core::commands::helpers::{IntoArg, validate_arg_count};
use bytes::Bytes;

/// Represents `RPOPLPUSH source destination`.
///
/// The store moves the tail of `source` to the head of `destination` atomically;
/// the builder only guarantees that `source` precedes `destination`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RPopLPush {
    pub source: Bytes,
    pub destination: Bytes,
}

impl RPopLPush {
    pub fn new(source: impl IntoArg, destination: impl IntoArg) -> Self {
        Self {
            source: source.into_arg(),
            destination: destination.into_arg(),
        }
    }
}

impl ParseCommand for RPopLPush {
    fn parse(args: &[Bytes]) -> Result<Self, CommandError> {
        validate_arg_count(args, 2, "RPOPLPUSH")?;
        Ok(RPopLPush {
            source: args[0].clone(),
            destination: args[1].clone(),
        })
    }
}

impl CommandSpec for RPopLPush {
    fn name(&self) -> &'static str {
        "rpoplpush"
    }
    fn arity(&self) -> i64 {
        3
    }
    fn flags(&self) -> CommandFlags {
        CommandFlags::WRITE | CommandFlags::DENY_OOM
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.source.clone(), self.destination.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![self.source.clone(), self.destination.clone()]
    }
}
