// src/core/commands/list/pushx.rs

use crate::core::CommandError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ParseCommand};
use crate::core::commands::helpers::{IntoArg, collect_args, parse_key_and_values};
use crate::core::commands::list::logic::key_then_values;
use bytes::Bytes;

// --- LPUSHX ---
/// Prepends values only if the list already exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LPushX {
    pub key: Bytes,
    pub values: Vec<Bytes>,
}

impl LPushX {
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

impl ParseCommand for LPushX {
    fn parse(args: &[Bytes]) -> Result<Self, CommandError> {
        let (key, values) = parse_key_and_values(args, "LPUSHX")?;
        Ok(LPushX { key, values })
    }
}

impl CommandSpec for LPushX {
    fn name(&self) -> &'static str {
        "lpushx"
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

// --- RPUSHX ---
/// Appends values only if the list already exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RPushX {
    pub key: Bytes,
    pub values: Vec<Bytes>,
}

impl RPushX {
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

impl ParseCommand for RPushX {
    fn parse(args: &[Bytes]) -> Result<Self, CommandError> {
        let (key, values) = parse_key_and_values(args, "RPUSHX")?;
        Ok(RPushX { key, values })
    }
}

impl CommandSpec for RPushX {
    fn name(&self) -> &'static str {
        "rpushx"
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
