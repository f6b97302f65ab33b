// src/core/commands/list/rpop.rs

use crate::core::CommandError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ParseCommand};
use crate::core::commands::helpers::{IntoArg, parse_key_and_optional_count};
use crate::core::commands::list::logic::key_then_optional_count;
use bytes::Bytes;

/// Represents `RPOP key [count]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RPop {
    pub key: Bytes,
    /// Emitted as a trailing token only when present.
    pub count: Option<Bytes>,
}

impl RPop {
    pub fn new(key: impl IntoArg) -> Self {
        Self {
            key: key.into_arg(),
            count: None,
        }
    }

    pub fn with_count(key: impl IntoArg, count: impl IntoArg) -> Self {
        Self {
            key: key.into_arg(),
            count: Some(count.into_arg()),
        }
    }
}

impl ParseCommand for RPop {
    fn parse(args: &[Bytes]) -> Result<Self, CommandError> {
        let (key, count) = parse_key_and_optional_count(args, "RPOP")?;
        Ok(RPop { key, count })
    }
}

impl CommandSpec for RPop {
    fn name(&self) -> &'static str {
        "rpop"
    }
    fn arity(&self) -> i64 {
        -2
    }
    fn flags(&self) -> CommandFlags {
        CommandFlags::WRITE
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        key_then_optional_count(&self.key, self.count.as_ref())
    }
}
