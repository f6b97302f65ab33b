// src/core/commands/list/blpop.rs

//! Implements the `BLPOP` command.

use crate::core::CommandError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ParseCommand};
use crate::core::commands::helpers::{IntoArg, collect_args};
use crate::core::commands::list::logic::{keys_then_timeout, parse_keys_then_timeout};
use crate::core::commands::timeout::Timeout;
use bytes::Bytes;

/// Represents the `BLPOP` command with its canonicalized arguments.
///
/// The timeout can only be set through [`BLPop::new`] or [`ParseCommand::parse`],
/// both of which normalize it:
///
/// ```compile_fail
/// let cmd = spinel_lists::core::commands::list::BLPop::default();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BLPop {
    pub keys: Vec<Bytes>,
    /// The normalized seconds token; always emitted after the keys.
    timeout: Bytes,
}

impl BLPop {
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

impl ParseCommand for BLPop {
    fn parse(args: &[Bytes]) -> Result<Self, CommandError> {
        let (keys, timeout) = parse_keys_then_timeout(args, "BLPOP")?;
        Ok(BLPop { keys, timeout })
    }
}

impl CommandSpec for BLPop {
    fn name(&self) -> &'static str {
        "blpop"
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
