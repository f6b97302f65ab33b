// src/core/mod.rs

//! The central module containing the list command builders and the client that
//! dispatches them.

pub mod client;
pub mod commands;
pub mod errors;
pub mod protocol;

pub use commands::{Command, ListCommand};
pub use errors::CommandError;
pub use protocol::RespValue;
