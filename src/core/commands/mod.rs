// src/core/commands/mod.rs

//! This module defines every supported list command and the central
//! `ListCommand` enum that wraps their typed, canonicalized state.
//! The `define_list_commands!` macro generates the enum and its dispatch,
//! so adding a command is a single line.

use crate::core::CommandError;
use crate::core::commands::command_trait::{CommandFlags, ParseCommand};
use bytes::Bytes;

pub use command::Command;
pub use command_spec::CommandSpec;
pub use helpers::IntoArg;
pub use timeout::Timeout;

pub mod command;
pub mod command_spec;
pub mod command_trait;
pub mod helpers;
pub mod list;
pub mod timeout;

macro_rules! define_list_commands {
    ($(($variant:ident, $name:literal)),* $(,)?) => {
        /// A typed list command, one variant per operation.
        #[derive(Debug, Clone, PartialEq)]
        pub enum ListCommand {
            $($variant(list::$variant),)*
        }

        impl ListCommand {
            /// Rebuilds a typed command from a token sequence.
            ///
            /// The operation name is matched case-insensitively.
            pub fn parse(command: &Command) -> Result<Self, CommandError> {
                let name = String::from_utf8_lossy(command.name()).to_ascii_lowercase();
                match name.as_str() {
                    $($name => Ok(ListCommand::$variant(list::$variant::parse(command.args())?)),)*
                    _ => Err(CommandError::UnknownCommand(name)),
                }
            }

            fn inner(&self) -> &dyn CommandSpec {
                match self {
                    $(ListCommand::$variant(cmd) => cmd,)*
                }
            }
        }

        $(
            impl From<list::$variant> for ListCommand {
                fn from(cmd: list::$variant) -> Self {
                    ListCommand::$variant(cmd)
                }
            }
        )*

        /// Every operation name this module can build, in lower case.
        pub const LIST_COMMAND_NAMES: &[&str] = &[$($name),*];
    };
}

define_list_commands! {
    (LPush, "lpush"),
    (RPush, "rpush"),
    (LPushX, "lpushx"),
    (RPushX, "rpushx"),
    (LPop, "lpop"),
    (RPop, "rpop"),
    (LRange, "lrange"),
    (RPopLPush, "rpoplpush"),
    (LLen, "llen"),
    (LRem, "lrem"),
    (BLPop, "blpop"),
    (BRPop, "brpop"),
    (LIndex, "lindex"),
    (LSet, "lset"),
    (LInsert, "linsert"),
    (LTrim, "ltrim"),
    (LPos, "lpos"),
    (LMove, "lmove"),
    (BLMove, "blmove"),
    (BRPopLPush, "brpoplpush"),
}

impl CommandSpec for ListCommand {
    fn name(&self) -> &'static str {
        self.inner().name()
    }
    fn arity(&self) -> i64 {
        self.inner().arity()
    }
    fn flags(&self) -> CommandFlags {
        self.inner().flags()
    }
    fn get_keys(&self) -> Vec<Bytes> {
        self.inner().get_keys()
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        self.inner().to_resp_args()
    }
}

impl TryFrom<&Command> for ListCommand {
    type Error = CommandError;

    fn try_from(command: &Command) -> Result<Self, Self::Error> {
        ListCommand::parse(command)
    }
}
