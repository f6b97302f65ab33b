// src/core/commands/list/rpush.rs

use crate::core::CommandError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ParseCommand};
use crate::core::commands::helpers::{IntoArg, collect_args, parse_key_and_values};
use crate::core::commands::list::logic::key_then_values;
use bytes::Bytes;

/// `RPUSH key [value ...]`: appends values; the store replies with the new length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RPush {
    pub key: Bytes,
    pub values: Vec<Bytes>,
}

impl RPush {
    pub fn new<I>(key: impl IntoArg, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoArg,
    {
        Self {
            key: key.into_arg(),
            values: collect_args(values),
        }
    }
}

impl ParseCommand for RPush {
    fn parse(args: &[Bytes]) -> Result<Self, CommandError> {
        let (key, values) = parse_key_and_values(args, "RPUSH")?;
        Ok(RPush { key, values })
    }
}

impl CommandSpec for RPush {
    fn name(&self) -> &'static str {
        "rpush"
    }
    fn arity(&self) -> i64 {
        -3
    }
    fn flags(&self) -> CommandFlags {
        CommandFlags::WRITE | CommandFlags::DENY_OOM
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        key_then_values(&self.key, &self.values)
    }
}
