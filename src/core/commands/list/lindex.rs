// src/core/commands/list/lindex.rs

use crate::core::CommandError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ParseCommand};
use crate::core::commands::helpers::{IntoArg, int_token, parse_integer, validate_arg_count};
use bytes::Bytes;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LIndex {
    pub key: Bytes,
    pub index: i64,
}

impl LIndex {
    pub fn new(key: impl IntoArg, index: i64) -> Self {
        Self {
            key: key.into_arg(),
            index,
        }
    }
}

impl ParseCommand for LIndex {
    fn parse(args: &[Bytes]) -> Result<Self, CommandError> {
        validate_arg_count(args, 2, "LINDEX")?;
        Ok(LIndex {
            key: args[0].clone(),
            index: parse_integer(&args[1])?,
        })
    }
}

impl CommandSpec for LIndex {
    fn name(&self) -> &'static str {
        "lindex"
    }
    fn arity(&self) -> i64 {
        3
    }
    fn flags(&self) -> CommandFlags {
        CommandFlags::READONLY
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![self.key.clone(), int_token(self.index)]
    }
}
