// src/core/commands/list/lpos.rs

use crate::core::CommandError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ParseCommand};
use crate::core::commands::helpers::{IntoArg, extract_str, parse_integer};
use bytes::Bytes;

/// Represents the `LPOS` command with all its options.
///
/// Options are emitted in `RANK`, `COUNT`, `MAXLEN` order and only when set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LPos {
    pub key: Bytes,
    pub element: Bytes,
    pub rank: Option<i64>,
    pub count: Option<u64>,
    pub max_len: Option<u64>,
}

impl LPos {
    pub fn new(key: impl IntoArg, element: impl IntoArg) -> Self {
        Self {
            key: key.into_arg(),
            element: element.into_arg(),
            ..Default::default()
        }
    }

    pub fn rank(mut self, rank: i64) -> Self {
        self.rank = Some(rank);
        self
    }

    /// `COUNT 0` asks the store for every match.
    pub fn count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn max_len(mut self, max_len: u64) -> Self {
        self.max_len = Some(max_len);
        self
    }
}

impl ParseCommand for LPos {
    fn parse(args: &[Bytes]) -> Result<Self, CommandError> {
        if args.len() < 2 {
            return Err(CommandError::WrongArgumentCount("LPOS".to_string()));
        }
        let mut lpos = LPos {
            key: args[0].clone(),
            element: args[1].clone(),
            ..Default::default()
        };

        let mut options = args[2..].iter();
        while let Some(option) = options.next() {
            let value = options.next().ok_or(CommandError::SyntaxError)?;
            match extract_str(option)?.to_ascii_lowercase().as_str() {
                "rank" => lpos.rank = Some(parse_integer(value)?),
                "count" => lpos.count = Some(parse_integer(value)?),
                "maxlen" => lpos.max_len = Some(parse_integer(value)?),
                _ => return Err(CommandError::SyntaxError),
            }
        }
        Ok(lpos)
    }
}

impl CommandSpec for LPos {
    fn name(&self) -> &'static str {
        "lpos"
    }
    fn arity(&self) -> i64 {
        -3
    }
    fn flags(&self) -> CommandFlags {
        CommandFlags::READONLY
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        let mut args = vec![self.key.clone(), self.element.clone()];
        if let Some(r) = self.rank {
            args.extend([Bytes::from_static(b"RANK"), r.into_arg()]);
        }
        if let Some(c) = self.count {
            args.extend([Bytes::from_static(b"COUNT"), c.into_arg()]);
        }
        if let Some(m) = self.max_len {
            args.extend([Bytes::from_static(b"MAXLEN"), m.into_arg()]);
        }
        args
    }
}
