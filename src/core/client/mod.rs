// src/core/client/mod.rs

//! The typed list API. Each method builds one canonical command and hands it to
//! the injected [`Run`] implementation.

mod runner;

pub use runner::Run;

use crate::config::ClientConfig;
use crate::core::RespValue;
use crate::core::commands::command_trait::CommandFlags;
use crate::core::commands::list::{
    BLMove, BLPop, BRPop, BRPopLPush, InsertPosition, LIndex, LInsert, LLen, LMove, LPop, LPos,
    LPush, LPushX, LRange, LRem, LSet, LTrim, RPop, RPopLPush, RPush, RPushX, Side,
};
use crate::core::commands::{CommandSpec, IntoArg, Timeout};
use tracing::{debug, trace};

/// A list-command client over an injected runner.
///
/// The client keeps no per-call state, so it can be shared across tasks as long
/// as the runner can. Replies are forwarded untouched; runner errors are
/// returned unchanged.
#[derive(Debug, Clone)]
pub struct ListClient<R> {
    runner: R,
    config: ClientConfig,
}

impl<R: Run> ListClient<R> {
    pub fn new(runner: R) -> Self {
        Self::with_config(runner, ClientConfig::default())
    }

    pub fn with_config(runner: R, config: ClientConfig) -> Self {
        Self { runner, config }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn into_runner(self) -> R {
        self.runner
    }

    /// Sends an already-built command.
    pub async fn execute<C>(&self, cmd: C) -> Result<RespValue, R::Error>
    where
        C: CommandSpec,
    {
        let name = cmd.name();
        let blocking = cmd.flags().contains(CommandFlags::BLOCKING);
        let command = cmd.to_command();

        if self.config.trace_commands {
            debug!(command = %command, "Dispatching list command");
        }
        if blocking {
            trace!(
                name,
                timeout = %String::from_utf8_lossy(&command.tokens()[command.len() - 1]),
                "Store may block this command until its timeout"
            );
        }

        self.runner.run(command).await.inspect_err(|_| {
            debug!(name, "Runner returned an error for list command");
        })
    }

    /// `LPUSH key [value ...]`. An empty value list is still sent.
    pub async fn lpush<I>(&self, key: impl IntoArg, values: I) -> Result<RespValue, R::Error>
    where
        I: IntoIterator,
        I::Item: IntoArg,
    {
        self.execute(LPush::new(key, values)).await
    }

    /// `RPUSH key [value ...]`. An empty value list is still sent.
    pub async fn rpush<I>(&self, key: impl IntoArg, values: I) -> Result<RespValue, R::Error>
    where
        I: IntoIterator,
        I::Item: IntoArg,
    {
        self.execute(RPush::new(key, values)).await
    }

    pub async fn lpushx<I>(&self, key: impl IntoArg, values: I) -> Result<RespValue, R::Error>
    where
        I: IntoIterator,
        I::Item: IntoArg,
    {
        self.execute(LPushX::new(key, values)).await
    }

    pub async fn rpushx<I>(&self, key: impl IntoArg, values: I) -> Result<RespValue, R::Error>
    where
        I: IntoIterator,
        I::Item: IntoArg,
    {
        self.execute(RPushX::new(key, values)).await
    }

    pub async fn lpop(&self, key: impl IntoArg) -> Result<RespValue, R::Error> {
        self.execute(LPop::new(key)).await
    }

    /// `LPOP key count`; the store replies with an array.
    pub async fn lpop_count(
        &self,
        key: impl IntoArg,
        count: impl IntoArg,
    ) -> Result<RespValue, R::Error> {
        self.execute(LPop::with_count(key, count)).await
    }

    pub async fn rpop(&self, key: impl IntoArg) -> Result<RespValue, R::Error> {
        self.execute(RPop::new(key)).await
    }

    pub async fn rpop_count(
        &self,
        key: impl IntoArg,
        count: impl IntoArg,
    ) -> Result<RespValue, R::Error> {
        self.execute(RPop::with_count(key, count)).await
    }

    pub async fn lrange(
        &self,
        key: impl IntoArg,
        start: impl IntoArg,
        stop: impl IntoArg,
    ) -> Result<RespValue, R::Error> {
        self.execute(LRange::new(key, start, stop)).await
    }

    pub async fn rpoplpush(
        &self,
        source: impl IntoArg,
        destination: impl IntoArg,
    ) -> Result<RespValue, R::Error> {
        self.execute(RPopLPush::new(source, destination)).await
    }

    pub async fn llen(&self, key: impl IntoArg) -> Result<RespValue, R::Error> {
        self.execute(LLen::new(key)).await
    }

    pub async fn lrem(
        &self,
        key: impl IntoArg,
        count: i64,
        element: impl IntoArg,
    ) -> Result<RespValue, R::Error> {
        self.execute(LRem::new(key, count, element)).await
    }

    pub async fn lindex(&self, key: impl IntoArg, index: i64) -> Result<RespValue, R::Error> {
        self.execute(LIndex::new(key, index)).await
    }

    pub async fn lset(
        &self,
        key: impl IntoArg,
        index: i64,
        element: impl IntoArg,
    ) -> Result<RespValue, R::Error> {
        self.execute(LSet::new(key, index, element)).await
    }

    pub async fn linsert(
        &self,
        key: impl IntoArg,
        position: InsertPosition,
        pivot: impl IntoArg,
        element: impl IntoArg,
    ) -> Result<RespValue, R::Error> {
        self.execute(LInsert::new(key, position, pivot, element)).await
    }

    pub async fn ltrim(
        &self,
        key: impl IntoArg,
        start: impl IntoArg,
        stop: impl IntoArg,
    ) -> Result<RespValue, R::Error> {
        self.execute(LTrim::new(key, start, stop)).await
    }

    /// `LPOS`; build the options with [`LPos::new`] and its setters.
    pub async fn lpos(&self, lpos: LPos) -> Result<RespValue, R::Error> {
        self.execute(lpos).await
    }

    pub async fn lmove(
        &self,
        source: impl IntoArg,
        destination: impl IntoArg,
        from: Side,
        to: Side,
    ) -> Result<RespValue, R::Error> {
        self.execute(LMove::new(source, destination, from, to)).await
    }

    /// `BLPOP key [key ...] timeout`.
    ///
    /// The timeout may be a `Duration`, an integer or float number of seconds,
    /// or a pre-formatted string; it is always sent as the last token.
    pub async fn blpop<I>(
        &self,
        keys: I,
        timeout: impl Into<Timeout>,
    ) -> Result<RespValue, R::Error>
    where
        I: IntoIterator,
        I::Item: IntoArg,
    {
        self.execute(BLPop::new(keys, timeout)?).await
    }

    /// `BRPOP key [key ...] timeout`, with the same timeout handling as [`Self::blpop`].
    pub async fn brpop<I>(
        &self,
        keys: I,
        timeout: impl Into<Timeout>,
    ) -> Result<RespValue, R::Error>
    where
        I: IntoIterator,
        I::Item: IntoArg,
    {
        self.execute(BRPop::new(keys, timeout)?).await
    }

    /// `BLPOP` using the configured default block timeout.
    pub async fn blpop_default<I>(&self, keys: I) -> Result<RespValue, R::Error>
    where
        I: IntoIterator,
        I::Item: IntoArg,
    {
        self.blpop(keys, self.config.default_block_timeout).await
    }

    /// `BRPOP` using the configured default block timeout.
    pub async fn brpop_default<I>(&self, keys: I) -> Result<RespValue, R::Error>
    where
        I: IntoIterator,
        I::Item: IntoArg,
    {
        self.brpop(keys, self.config.default_block_timeout).await
    }

    pub async fn brpoplpush(
        &self,
        source: impl IntoArg,
        destination: impl IntoArg,
        timeout: impl Into<Timeout>,
    ) -> Result<RespValue, R::Error> {
        self.execute(BRPopLPush::new(source, destination, timeout)?).await
    }

    pub async fn blmove(
        &self,
        source: impl IntoArg,
        destination: impl IntoArg,
        from: Side,
        to: Side,
        timeout: impl Into<Timeout>,
    ) -> Result<RespValue, R::Error> {
        self.execute(BLMove::new(source, destination, from, to, timeout)?).await
    }
}
