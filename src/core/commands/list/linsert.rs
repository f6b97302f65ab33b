// src/core/commands/list/linsert.rs

use crate::core::CommandError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ParseCommand};
use crate::core::commands::helpers::{IntoArg, extract_str, validate_arg_count};
use bytes::Bytes;

/// Where `LINSERT` places the element relative to the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertPosition {
    #[default]
    Before,
    After,
}

impl InsertPosition {
    pub fn as_token(self) -> Bytes {
        match self {
            InsertPosition::Before => Bytes::from_static(b"BEFORE"),
            InsertPosition::After => Bytes::from_static(b"AFTER"),
        }
    }

    fn parse(token: &Bytes) -> Result<Self, CommandError> {
        match extract_str(token)?.to_ascii_lowercase().as_str() {
            "before" => Ok(InsertPosition::Before),
            "after" => Ok(InsertPosition::After),
            _ => Err(CommandError::SyntaxError),
        }
    }
}

/// Represents `LINSERT key BEFORE|AFTER pivot element`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LInsert {
    pub key: Bytes,
    pub position: InsertPosition,
    pub pivot: Bytes,
    pub element: Bytes,
}

impl LInsert {
    pub fn new(
        key: impl IntoArg,
        position: InsertPosition,
        pivot: impl IntoArg,
        element: impl IntoArg,
    ) -> Self {
        Self {
            key: key.into_arg(),
            position,
            pivot: pivot.into_arg(),
            element: element.into_arg(),
        }
    }
}

impl ParseCommand for LInsert {
    fn parse(args: &[Bytes]) -> Result<Self, CommandError> {
        validate_arg_count(args, 4, "LINSERT")?;
        Ok(LInsert {
            key: args[0].clone(),
            position: InsertPosition::parse(&args[1])?,
            pivot: args[2].clone(),
            element: args[3].clone(),
        })
    }
}

impl CommandSpec for LInsert {
    fn name(&self) -> &'static str {
        "linsert"
    }
    fn arity(&self) -> i64 {
        5
    }
    fn flags(&self) -> CommandFlags {
        CommandFlags::WRITE | CommandFlags::DENY_OOM
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.key.clone(),
            self.position.as_token(),
            self.pivot.clone(),
            self.element.clone(),
        ]
    }
}
