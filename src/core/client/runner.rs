// src/core/client/runner.rs

//! Defines the seam between the list client and whatever carries commands to the store.

use crate::core::{Command, CommandError, RespValue};
use async_trait::async_trait;
use std::sync::Arc;

/// Sends one command to the store and returns its decoded reply.
///
/// Implementations own connection handling, framing and reply decoding. Their
/// error type is returned to callers as-is; it only needs to absorb the local
/// [`CommandError`] raised when a timeout cannot be normalized.
#[async_trait]
pub trait Run: Send + Sync {
    type Error: From<CommandError> + Send;

    async fn run(&self, command: Command) -> Result<RespValue, Self::Error>;
}

#[async_trait]
impl<R: Run + ?Sized> Run for Arc<R> {
    type Error = R::Error;

    async fn run(&self, command: Command) -> Result<RespValue, Self::Error> {
        (**self).run(command).await
    }
}

#[async_trait]
impl<R: Run + ?Sized> Run for &R {
    type Error = R::Error;

    async fn run(&self, command: Command) -> Result<RespValue, Self::Error> {
        (**self).run(command).await
    }
}
