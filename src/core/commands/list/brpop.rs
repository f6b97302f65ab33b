// src/core/commands/list/brpop.rs

//! Implements the `BRPOP` command.

use crate::core::CommandError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ParseCommand};
use crate::core::commands::helpers::{IntoArg, collect_args};
use crate::core::commands::list::logic::{keys_then_timeout, parse_keys_then_timeout};
use crate::core::commands::timeout::Timeout;
use bytes::Bytes;

/// Represents the `BRPOP` command with its canonicalized arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct BRPop {
    pub keys: Vec<Bytes>,
    /// The normalized seconds token; always emitted after the keys.
    timeout: Bytes,
}

impl BRPop {
    /// Builds the command, failing only if the timeout cannot be normalized.
    ///
    /// An empty key list is accepted and left for the store to reject.
    pub fn new<I>(keys: I, timeout: impl Into<Timeout>) -> Result<Self, CommandError>
    where
        I: IntoIterator,
        I::Item: IntoArg,
    {
        Ok(Self {
            keys: collect_args(keys),
            timeout: timeout.into().to_token()?,
        })
    }

    /// The normalized seconds token.
    pub fn timeout(&self) -> &Bytes {
        &self.timeout
    }
}

impl ParseCommand for BRPop {
    fn parse(args: &[Bytes]) -> Result<Self, CommandError> {
        let (keys, timeout) = parse_keys_then_timeout(args, "BRPOP")?;
        Ok(BRPop { keys, timeout })
    }
}

impl CommandSpec for BRPop {
    fn name(&self) -> &'static str {
        "brpop"
    }

    fn arity(&self) -> i64 {
        -3
    }

    fn flags(&self) -> CommandFlags {
        CommandFlags::WRITE | CommandFlags::BLOCKING
    }

    fn get_keys(&self) -> Vec<Bytes> {
        self.keys.clone()
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        keys_then_timeout(&self.keys, &self.timeout)
    }
}
