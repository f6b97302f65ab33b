// src/core/commands/list/blmove.rs

//! Implements the `BLMOVE` command, the blocking variant of `LMOVE`.

use crate::core::CommandError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ParseCommand};
use crate::core::commands::helpers::{IntoArg, validate_arg_count};
use crate::core::commands::list::lmove::Side;
use crate::core::commands::list::logic::parse_timeout;
use crate::core::commands::timeout::Timeout;
use bytes::Bytes;

#[derive(Debug, Clone, PartialEq)]
pub struct BLMove {
    pub source: Bytes,
    pub destination: Bytes,
    pub from: Side,
    pub to: Side,
    timeout: Bytes,
}

impl BLMove {
    pub fn new(
        source: impl IntoArg,
        destination: impl IntoArg,
        from: Side,
        to: Side,
        timeout: impl Into<Timeout>,
    ) -> Result<Self, CommandError> {
        Ok(Self {
            source: source.into_arg(),
            destination: destination.into_arg(),
            from,
            to,
            timeout: timeout.into().to_token()?,
        })
    }

    /// The normalized seconds token.
    pub fn timeout(&self) -> &Bytes {
        &self.timeout
    }
}

impl ParseCommand for BLMove {
    fn parse(args: &[Bytes]) -> Result<Self, CommandError> {
        validate_arg_count(args, 5, "BLMOVE")?;
        Ok(BLMove {
            source: args[0].clone(),
            destination: args[1].clone(),
            from: Side::parse(&args[2])?,
            to: Side::parse(&args[3])?,
            timeout: parse_timeout(&args[4])?,
        })
    }
}

impl CommandSpec for BLMove {
    fn name(&self) -> &'static str {
        "blmove"
    }
    fn arity(&self) -> i64 {
        6
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
            self.from.as_token(),
            self.to.as_token(),
            self.timeout.clone(),
        ]
    }
}
