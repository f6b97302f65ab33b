// src/core/commands/list/ltrim.rs

use crate::core::CommandError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ParseCommand};
use crate::core::commands::helpers::{IntoArg, validate_arg_count};
use bytes::Bytes;

/// Represents `LTRIM key start stop`, which keeps only the given range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LTrim {
    pub key: Bytes,
    pub start: Bytes,
    pub stop: Bytes,
}

impl LTrim {
    pub fn new(key: impl IntoArg, start: impl IntoArg, stop: impl IntoArg) -> Self {
        Self {
            key: key.into_arg(),
            start: start.into_arg(),
            stop: stop.into_arg(),
        }
    }
}

impl ParseCommand for LTrim {
    fn parse(args: &[Bytes]) -> Result<Self, CommandError> {
        validate_arg_count(args, 3, "LTRIM")?;
        Ok(LTrim {
            key: args[0].clone(),
            start: args[1].clone(),
            stop: args[2].clone(),
        })
    }
}

impl CommandSpec for LTrim {
    fn name(&self) -> &'static str {
        "ltrim"
    }
    fn arity(&self) -> i64 {
        4
    }
    fn flags(&self) -> CommandFlags {
        CommandFlags::WRITE
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![self.key.clone(), self.start.clone(), self.stop.clone()]
    }
}
