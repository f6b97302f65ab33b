// src/core/commands/list/llen.rs

use crate::core::CommandError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ParseCommand};
use crate::core::commands::helpers::{IntoArg, validate_arg_count};
use bytes::Bytes;

/// Represents `LLEN key`. The store replies 0 for a missing key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LLen {
    pub key: Bytes,
}

impl LLen {
    pub fn new(key: impl IntoArg) -> Self {
        Self {
            key: key.into_arg(),
        }
    }
}

impl ParseCommand for LLen {
    fn parse(args: &[Bytes]) -> Result<Self, CommandError> {
        validate_arg_count(args, 1, "LLEN")?;
        Ok(LLen {
            key: args[0].clone(),
        })
    }
}

impl CommandSpec for LLen {
    fn name(&self) -> &'static str {
        "llen"
    }
    fn arity(&self) -> i64 {
        2
    }
    fn flags(&self) -> CommandFlags {
        CommandFlags::READONLY
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
}
