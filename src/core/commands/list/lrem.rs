// src/core/commands/list/lrem.rs

use crate::core::CommandError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ParseCommand};
use crate::core::commands::helpers::{IntoArg, int_token, parse_integer, validate_arg_count};
use bytes::Bytes;

/// Represents the `LREM` command, which removes elements from a list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LRem {
    /// The key of the list.
    pub key: Bytes,
    /// The number of occurrences to remove. The store reads the sign:
    /// - `count > 0`: Remove elements from head to tail.
    /// - `count < 0`: Remove elements from tail to head.
    /// - `count = 0`: Remove all matching elements.
    pub count: i64,
    /// The element to remove.
    pub element: Bytes,
}

impl LRem {
    pub fn new(key: impl IntoArg, count: i64, element: impl IntoArg) -> Self {
        Self {
            key: key.into_arg(),
            count,
            element: element.into_arg(),
        }
    }
}

impl ParseCommand for LRem {
    fn parse(args: &[Bytes]) -> Result<Self, CommandError> {
        validate_arg_count(args, 3, "LREM")?;
        Ok(LRem {
            key: args[0].clone(),
            count: parse_integer(&args[1])?,
            element: args[2].clone(),
        })
    }
}

impl CommandSpec for LRem {
    fn name(&self) -> &'static str {
        "lrem"
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
        vec![self.key.clone(), int_token(self.count), self.element.clone()]
    }
}
