// src/core/commands/command_spec.rs

//! Defines the `CommandSpec` trait, which describes a command and assembles its
//! token sequence.

use crate::core::commands::Command;
use crate::core::commands::command_trait::CommandFlags;
use bytes::Bytes;

/// A trait for describing a command's properties and producing its tokens.
pub trait CommandSpec {
    /// The name of the command in lowercase.
    fn name(&self) -> &'static str;

    /// The arity of the command as the store declares it.
    /// - Positive integer: fixed number of arguments.
    /// - Negative integer: minimum number of arguments (e.g., -3 for `LPUSH key value`).
    ///
    /// This is metadata only; builders never enforce it.
    fn arity(&self) -> i64;

    /// A bitmask of flags describing the command's behavior (e.g., `WRITE`, `BLOCKING`).
    fn flags(&self) -> CommandFlags;

    /// Extracts the key(s) the command touches.
    fn get_keys(&self) -> Vec<Bytes>;

    /// The argument tokens that follow the command name, in wire order.
    fn to_resp_args(&self) -> Vec<Bytes>;

    /// Assembles the full command: name first, then the arguments.
    fn to_command(&self) -> Command {
        Command::new(self.name(), self.to_resp_args())
    }
}
