// src/core/commands/command.rs

//! The token sequence handed to a command runner.

use crate::core::CommandError;
use bytes::Bytes;
use std::fmt;

/// An ordered, non-empty sequence of tokens: the lower-case operation name
/// followed by its positional arguments in the order the store expects.
///
/// Token order is never changed after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Command {
    tokens: Vec<Bytes>,
}

impl Command {
    /// Assembles a command from its name and already-canonicalized arguments.
    pub fn new(name: &'static str, args: Vec<Bytes>) -> Self {
        let mut tokens = Vec::with_capacity(args.len() + 1);
        tokens.push(Bytes::from_static(name.as_bytes()));
        tokens.extend(args);
        Self { tokens }
    }

    /// Wraps a raw token sequence, e.g. one read back from a log or a fake store.
    pub fn from_tokens(tokens: Vec<Bytes>) -> Result<Self, CommandError> {
        if tokens.is_empty() {
            return Err(CommandError::EmptyCommand);
        }
        Ok(Self { tokens })
    }

    /// The operation name token.
    pub fn name(&self) -> &Bytes {
        &self.tokens[0]
    }

    /// The positional arguments that follow the operation name.
    pub fn args(&self) -> &[Bytes] {
        &self.tokens[1..]
    }

    pub fn tokens(&self) -> &[Bytes] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Bytes> {
        self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false; a command carries at least its name.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", String::from_utf8_lossy(token))?;
        }
        Ok(())
    }
}

impl From<Command> for Vec<Bytes> {
    fn from(command: Command) -> Self {
        command.tokens
    }
}
