// tests/integration/test_helpers.rs

//! Test doubles for the `Run` seam: a recording runner with scripted replies
//! and an in-memory list store that interprets the commands it receives.

#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use spinel_lists::core::commands::list::{InsertPosition, Side};
use spinel_lists::core::{Command, CommandError, ListCommand, RespValue};
use spinel_lists::{ListClient, Run};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Notify;
use tokio::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// The error type of both test runners.
#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Command(#[from] CommandError),

    /// An error reply from the store.
    #[error("{0}")]
    Store(String),

    #[error("connection reset by peer")]
    Transport,
}

fn store_err(msg: &str) -> TestError {
    TestError::Store(msg.to_string())
}

/// Set up minimal tracing for tests (ignores the error if already initialized).
pub fn init_test_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("warn"))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// Renders a command's tokens as strings for readable assertions.
pub fn tokens(command: &Command) -> Vec<String> {
    command
        .tokens()
        .iter()
        .map(|t| String::from_utf8_lossy(t).into_owned())
        .collect()
}

pub fn bulk(s: &str) -> RespValue {
    RespValue::BulkString(Bytes::copy_from_slice(s.as_bytes()))
}

pub fn bulk_array(items: &[&str]) -> RespValue {
    RespValue::Array(items.iter().map(|s| bulk(s)).collect())
}

// ===== RecordingRunner =====

/// Records every command and answers from a queue of scripted replies.
/// When the queue is empty it answers `+OK`.
#[derive(Default)]
pub struct RecordingRunner {
    commands: Mutex<Vec<Command>>,
    replies: Mutex<VecDeque<Result<RespValue, TestError>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_reply(&self, reply: Result<RespValue, TestError>) {
        self.replies.lock().push_back(reply);
    }

    pub fn commands(&self) -> Vec<Command> {
        self.commands.lock().clone()
    }

    pub fn last_tokens(&self) -> Vec<String> {
        self.commands
            .lock()
            .last()
            .map(tokens)
            .unwrap_or_default()
    }
}

#[async_trait]
impl Run for RecordingRunner {
    type Error = TestError;

    async fn run(&self, command: Command) -> Result<RespValue, TestError> {
        self.commands.lock().push(command);
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(RespValue::SimpleString("OK".into())))
    }
}

pub fn recording_client() -> (ListClient<Arc<RecordingRunner>>, Arc<RecordingRunner>) {
    init_test_tracing();
    let runner = Arc::new(RecordingRunner::new());
    (ListClient::new(runner.clone()), runner)
}

// ===== FakeStore =====

type Lists = HashMap<Bytes, VecDeque<Bytes>>;

/// An in-memory list store. It re-parses every command it receives, so it also
/// checks that the client produced tokens the store can understand.
#[derive(Default)]
pub struct FakeStore {
    lists: Mutex<Lists>,
    pushed: Notify,
    received: Mutex<Vec<Command>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<Command> {
        self.received.lock().clone()
    }

    pub fn list(&self, key: &str) -> Vec<String> {
        self.lists
            .lock()
            .get(key.as_bytes())
            .map(|l| {
                l.iter()
                    .map(|v| String::from_utf8_lossy(v).into_owned())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn write<T>(&self, f: impl FnOnce(&mut Lists) -> T) -> T {
        let result = f(&mut self.lists.lock());
        self.pushed.notify_waiters();
        result
    }

    fn read<T>(&self, f: impl FnOnce(&Lists) -> T) -> T {
        f(&self.lists.lock())
    }

    /// Retries `attempt` whenever a write happens until it yields a reply or
    /// the timeout elapses. A zero timeout waits forever.
    async fn block<F>(&self, timeout: &Bytes, mut attempt: F) -> Result<RespValue, TestError>
    where
        F: FnMut(&mut Lists) -> Option<RespValue> + Send,
    {
        let secs: f64 = std::str::from_utf8(timeout)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| store_err("ERR timeout is not a float or out of range"))?;
        if secs < 0.0 {
            return Err(store_err("ERR timeout is negative"));
        }
        let deadline = (secs > 0.0).then(|| Instant::now() + Duration::from_secs_f64(secs));

        loop {
            let notified = self.pushed.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            let reply = attempt(&mut self.lists.lock());
            if let Some(reply) = reply {
                self.pushed.notify_waiters();
                return Ok(reply);
            }

            match deadline {
                Some(deadline) => {
                    if tokio::time::timeout_at(deadline, notified).await.is_err() {
                        return Ok(RespValue::Null);
                    }
                }
                None => notified.await,
            }
        }
    }
}

fn wrong_args(cmd: &str) -> TestError {
    TestError::Store(format!("ERR wrong number of arguments for '{cmd}' command"))
}

fn int_arg<T: std::str::FromStr>(token: &Bytes) -> Result<T, TestError> {
    std::str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| store_err("ERR value is not an integer or out of range"))
}

fn pop_one(lists: &mut Lists, key: &Bytes, side: Side) -> Option<Bytes> {
    let list = lists.get_mut(key)?;
    let value = match side {
        Side::Left => list.pop_front(),
        Side::Right => list.pop_back(),
    };
    if list.is_empty() {
        lists.remove(key);
    }
    value
}

fn push_all(lists: &mut Lists, key: &Bytes, values: &[Bytes], side: Side) -> i64 {
    let list = lists.entry(key.clone()).or_default();
    for value in values {
        match side {
            Side::Left => list.push_front(value.clone()),
            Side::Right => list.push_back(value.clone()),
        }
    }
    list.len() as i64
}

fn move_one(lists: &mut Lists, src: &Bytes, dst: &Bytes, from: Side, to: Side) -> Option<Bytes> {
    let value = pop_one(lists, src, from)?;
    push_all(lists, dst, std::slice::from_ref(&value), to);
    Some(value)
}

fn normalize_index(len: usize, index: i64) -> Option<usize> {
    let len = len as i64;
    let index = if index < 0 { len + index } else { index };
    (0..len).contains(&index).then_some(index as usize)
}

fn normalize_range(len: usize, start: i64, stop: i64) -> Option<(usize, usize)> {
    let len = len as i64;
    let start = if start < 0 { (len + start).max(0) } else { start };
    let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };
    if start > stop || start >= len {
        return None;
    }
    Some((start as usize, stop as usize))
}

fn pop_reply(
    lists: &mut Lists,
    key: &Bytes,
    count: Option<&Bytes>,
    side: Side,
) -> Result<RespValue, TestError> {
    let Some(count) = count else {
        return Ok(pop_one(lists, key, side).into());
    };
    let count: i64 = int_arg(count)?;
    if count < 0 {
        return Err(store_err("ERR value is out of range, must be positive"));
    }
    if !lists.contains_key(key) {
        return Ok(RespValue::NullArray);
    }
    let popped: Vec<Bytes> = (0..count)
        .map_while(|_| pop_one(lists, key, side))
        .collect();
    Ok(popped.into())
}

#[async_trait]
impl Run for FakeStore {
    type Error = TestError;

    async fn run(&self, command: Command) -> Result<RespValue, TestError> {
        self.received.lock().push(command.clone());
        let parsed =
            ListCommand::parse(&command).map_err(|e| TestError::Store(format!("ERR {e}")))?;

        match parsed {
            ListCommand::LPush(c) if c.values.is_empty() => Err(wrong_args("lpush")),
            ListCommand::RPush(c) if c.values.is_empty() => Err(wrong_args("rpush")),
            ListCommand::LPush(c) => {
                Ok(self.write(|l| push_all(l, &c.key, &c.values, Side::Left)).into())
            }
            ListCommand::RPush(c) => {
                Ok(self.write(|l| push_all(l, &c.key, &c.values, Side::Right)).into())
            }
            ListCommand::LPushX(c) => Ok(self
                .write(|l| {
                    if l.contains_key(&c.key) {
                        push_all(l, &c.key, &c.values, Side::Left)
                    } else {
                        0
                    }
                })
                .into()),
            ListCommand::RPushX(c) => Ok(self
                .write(|l| {
                    if l.contains_key(&c.key) {
                        push_all(l, &c.key, &c.values, Side::Right)
                    } else {
                        0
                    }
                })
                .into()),
            ListCommand::LPop(c) => {
                self.write(|l| pop_reply(l, &c.key, c.count.as_ref(), Side::Left))
            }
            ListCommand::RPop(c) => {
                self.write(|l| pop_reply(l, &c.key, c.count.as_ref(), Side::Right))
            }
            ListCommand::LLen(c) => {
                Ok(self.read(|l| l.get(&c.key).map_or(0, |list| list.len() as i64)).into())
            }
            ListCommand::LRange(c) => {
                let (start, stop): (i64, i64) = (int_arg(&c.start)?, int_arg(&c.stop)?);
                Ok(self.read(|l| {
                    let Some(list) = l.get(&c.key) else {
                        return RespValue::Array(vec![]);
                    };
                    match normalize_range(list.len(), start, stop) {
                        Some((s, e)) => list.range(s..=e).cloned().collect::<Vec<_>>().into(),
                        None => RespValue::Array(vec![]),
                    }
                }))
            }
            ListCommand::LTrim(c) => {
                let (start, stop): (i64, i64) = (int_arg(&c.start)?, int_arg(&c.stop)?);
                self.write(|l| {
                    if let Some(list) = l.get_mut(&c.key) {
                        match normalize_range(list.len(), start, stop) {
                            Some((s, e)) => {
                                list.truncate(e + 1);
                                list.drain(..s);
                            }
                            None => list.clear(),
                        }
                        if list.is_empty() {
                            l.remove(&c.key);
                        }
                    }
                });
                Ok(RespValue::SimpleString("OK".into()))
            }
            ListCommand::LIndex(c) => Ok(self.read(|l| {
                l.get(&c.key)
                    .and_then(|list| normalize_index(list.len(), c.index).map(|i| list[i].clone()))
                    .into()
            })),
            ListCommand::LSet(c) => self.write(|l| -> Result<RespValue, TestError> {
                let list = l.get_mut(&c.key).ok_or_else(|| store_err("ERR no such key"))?;
                let i = normalize_index(list.len(), c.index)
                    .ok_or_else(|| store_err("ERR index out of range"))?;
                list[i] = c.element.clone();
                Ok(RespValue::SimpleString("OK".into()))
            }),
            ListCommand::LInsert(c) => Ok(self
                .write(|l| {
                    let Some(list) = l.get_mut(&c.key) else {
                        return 0;
                    };
                    let Some(pos) = list.iter().position(|v| v == &c.pivot) else {
                        return -1;
                    };
                    let at = match c.position {
                        InsertPosition::Before => pos,
                        InsertPosition::After => pos + 1,
                    };
                    list.insert(at, c.element.clone());
                    list.len() as i64
                })
                .into()),
            ListCommand::LRem(c) => Ok(self
                .write(|l| {
                    let Some(list) = l.get_mut(&c.key) else {
                        return 0;
                    };
                    let limit = if c.count == 0 {
                        usize::MAX
                    } else {
                        c.count.unsigned_abs() as usize
                    };
                    let mut removed = 0;
                    let mut kept = VecDeque::with_capacity(list.len());
                    if c.count < 0 {
                        for item in list.drain(..).rev() {
                            if removed < limit && item == c.element {
                                removed += 1;
                            } else {
                                kept.push_front(item);
                            }
                        }
                    } else {
                        for item in list.drain(..) {
                            if removed < limit && item == c.element {
                                removed += 1;
                            } else {
                                kept.push_back(item);
                            }
                        }
                    }
                    *list = kept;
                    if list.is_empty() {
                        l.remove(&c.key);
                    }
                    removed as i64
                })
                .into()),
            ListCommand::LPos(c) => {
                let rank = c.rank.unwrap_or(1);
                if rank == 0 {
                    return Err(store_err("ERR RANK can't be zero"));
                }
                let wanted = match c.count {
                    None => 1,
                    Some(0) => usize::MAX,
                    Some(n) => n as usize,
                };
                let max_len = match c.max_len {
                    None | Some(0) => usize::MAX,
                    Some(n) => n as usize,
                };
                let matches: Vec<i64> = self.read(|l| {
                    let Some(list) = l.get(&c.key) else {
                        return vec![];
                    };
                    let indices: Box<dyn Iterator<Item = usize>> = if rank > 0 {
                        Box::new(0..list.len())
                    } else {
                        Box::new((0..list.len()).rev())
                    };
                    indices
                        .take(max_len)
                        .filter(|&i| list[i] == c.element)
                        .skip(rank.unsigned_abs() as usize - 1)
                        .take(wanted)
                        .map(|i| i as i64)
                        .collect()
                });
                Ok(match c.count {
                    Some(_) => RespValue::Array(matches.into_iter().map(RespValue::Integer).collect()),
                    None => matches.first().map_or(RespValue::Null, |&i| RespValue::Integer(i)),
                })
            }
            ListCommand::RPopLPush(c) => Ok(self
                .write(|l| move_one(l, &c.source, &c.destination, Side::Right, Side::Left))
                .into()),
            ListCommand::LMove(c) => Ok(self
                .write(|l| move_one(l, &c.source, &c.destination, c.from, c.to))
                .into()),
            ListCommand::BLPop(c) if c.keys.is_empty() => Err(wrong_args("blpop")),
            ListCommand::BRPop(c) if c.keys.is_empty() => Err(wrong_args("brpop")),
            ListCommand::BLPop(c) => {
                self.block(c.timeout(), |l| first_pop(l, &c.keys, Side::Left))
                    .await
            }
            ListCommand::BRPop(c) => {
                self.block(c.timeout(), |l| first_pop(l, &c.keys, Side::Right))
                    .await
            }
            ListCommand::BRPopLPush(c) => {
                self.block(c.timeout(), |l| {
                    move_one(l, &c.source, &c.destination, Side::Right, Side::Left)
                        .map(RespValue::BulkString)
                })
                .await
            }
            ListCommand::BLMove(c) => {
                self.block(c.timeout(), |l| {
                    move_one(l, &c.source, &c.destination, c.from, c.to).map(RespValue::BulkString)
                })
                .await
            }
        }
    }
}

/// Pops from the first non-empty key, replying `[key, element]`.
fn first_pop(lists: &mut Lists, keys: &[Bytes], side: Side) -> Option<RespValue> {
    keys.iter().find_map(|key| {
        pop_one(lists, key, side)
            .map(|value| RespValue::Array(vec![RespValue::BulkString(key.clone()), value.into()]))
    })
}

pub fn fake_client() -> (ListClient<Arc<FakeStore>>, Arc<FakeStore>) {
    init_test_tracing();
    let store = Arc::new(FakeStore::new());
    (ListClient::new(store.clone()), store)
}
