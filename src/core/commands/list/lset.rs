// src/core/commands/list/lset.rs

use crate::core::CommandError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ParseCommand};
use crate::core::commands::helpers::{IntoArg, int_token, parse_integer, validate_arg_count};
use bytes::Bytes;

/// Represents `LSET key index element`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LSet {
    pub key: Bytes,
    pub index: i64,
    pub element: Bytes,
}

impl LSet {
    pub fn new(key: impl IntoArg, index: i64, element: impl IntoArg) -> Self {
        Self {
            key: key.into_arg(),
            index,
            element: element.into_arg(),
        }
    }
}

impl ParseCommand for LSet {
    fn parse(args: &[Bytes]) -> Result<Self, CommandError> {
        validate_arg_count(args, 3, "LSET")?;
        Ok(LSet {
            key: args[0].clone(),
            index: parse_integer(&args[1])?,
            element: args[2].clone(),
        })
    }
}

impl CommandSpec for LSet {
    fn name(&self) -> &'static str {
        "lset"
    }
    fn arity(&self) -> i64 {
        4
    }
    fn flags(&self) -> CommandFlags {
        CommandFlags::WRITE | CommandFlags::DENY_OOM
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![self.key.clone(), int_token(self.index), self.element.clone()]
    }
}
