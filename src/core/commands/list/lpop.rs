// src/core/commands/list/lpop.rs

use crate::core::CommandError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ParseCommand};
use crate::core::commands::helpers::{IntoArg, parse_key_and_optional_count};
use crate::core::commands::list::logic::key_then_optional_count;
use bytes::Bytes;

/// Represents `LPOP key [count]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LPop {
    pub key: Bytes,
    /// Emitted as a trailing token only when present.
    pub count: Option<Bytes>,
}

impl LPop {
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

impl ParseCommand for LPop {
    fn parse(args: &[Bytes]) -> Result<Self, CommandError> {
        let (key, count) = parse_key_and_optional_count(args, "LPOP")?;
        Ok(LPop { key, count })
    }
}

impl CommandSpec for LPop {
    fn name(&self) -> &'static str {
        "lpop"
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
