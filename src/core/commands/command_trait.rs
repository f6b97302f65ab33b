// src/core/commands/command_trait.rs

//! Defines the traits shared by all list commands.

use crate::core::CommandError;
use bitflags::bitflags;
use bytes::Bytes;

bitflags! {
    /// Flags that describe how the store treats a command.
    /// The client uses them to decide how to log a dispatch.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct CommandFlags: u32 {
        /// The command modifies the dataset.
        const WRITE          = 1 << 0;
        /// The command only reads data.
        const READONLY       = 1 << 1;
        /// The store denies the command when it is out of memory.
        const DENY_OOM       = 1 << 2;
        /// The store may hold the request open until its timeout elapses.
        const BLOCKING       = 1 << 3;
    }
}

/// A trait for rebuilding a command from the argument tokens that follow its name.
///
/// This is the inverse of [`CommandSpec::to_resp_args`](super::CommandSpec::to_resp_args)
/// and only validates what it needs to reconstruct the typed command.
pub trait ParseCommand: Sized {
    fn parse(args: &[Bytes]) -> Result<Self, CommandError>;
}
