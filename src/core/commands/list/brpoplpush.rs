// src/core/commands/list/brpoplpush.rs

use crate::core::CommandError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ParseCommand};
use crate::core::commands::helpers::{IntoArg, validate_arg_count};
use crate::core::commands::list::logic::parse_timeout;
use crate::core::commands::timeout::Timeout;
use bytes::Bytes;

/// Represents `BRPOPLPUSH source destination timeout`.
#[derive(Debug, Clone, PartialEq)]
pub struct BRPopLPush {
    pub source: Bytes,
    pub destination: Bytes,
    timeout: Bytes,
}

impl BRPopLPush {
    pub fn new(
        source: impl IntoArg,
        destination: impl IntoArg,
        timeout: impl Into<Timeout>,
    ) -> Result<Self, CommandError> {
        Ok(Self {
            source: source.into_arg(),
            destination: destination.into_arg(),
            timeout: timeout.into().to_token()?,
        })
    }

    /// The normalized seconds token.
    pub fn timeout(&self) -> &Bytes {
        &self.timeout
    }
}

impl ParseCommand for BRPopLPush {
    fn parse(args: &[Bytes]) -> Result<Self, CommandError> {
        validate_arg_count(args, 3, "BRPOPLPUSH")?;
        Ok(BRPopLPush {
            source: args[0].clone(),
            destination: args[1].clone(),
            timeout: parse_timeout(&args[2])?,
        })
    }
}

impl CommandSpec for BRPopLPush {
    fn name(&self) -> &'static str {
        "brpoplpush"
    }
    fn arity(&self) -> i64 {
        4
    }
    fn flags(&self) -> CommandFlags {
        CommandFlags::WRITE | CommandFlags::DENY_OOM | CommandFlags::BLOCKING
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.source.clone(), self.destination.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.source.clone(),
            self.destination.clone(),
            self.timeout.clone(),
        ]
    }
}
