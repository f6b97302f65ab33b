// src/core/commands/list/lpush.rs

use crate::core::CommandError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ParseCommand};
use crate::core::commands::helpers::{IntoArg, collect_args, parse_key_and_values};
use crate::core::commands::list::logic::key_then_values;
use bytes::Bytes;

/// `LPUSH key [value ...]`: prepends values; the store replies with the new length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LPush {
    pub key: Bytes,
    pub values: Vec<Bytes>,
}

impl LPush {
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

impl ParseCommand for LPush {
    fn parse(args: &[Bytes]) -> Result<Self, CommandError> {
        let (key, values) = parse_key_and_values(args, "LPUSH")?;
        Ok(LPush { key, values })
    }
}

impl CommandSpec for LPush {
    fn name(&self) -> &'static str {
        "lpush"
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
