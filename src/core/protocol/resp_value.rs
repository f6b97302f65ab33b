// src/core/protocol/resp_value.rs

//! Defines the decoded reply type handed back by a command runner.

use bytes::Bytes;

/// `RespValue` is the already-decoded reply of the store.
///
/// Decoding the wire format is the runner's job; list commands only forward
/// whatever value the runner produced. The variants mirror the reply kinds the
/// store can send for list commands: nil, strings, integers and arrays.
#[derive(Debug, Clone, PartialEq)]
pub enum RespValue {
    SimpleString(String),
    BulkString(Bytes),
    Integer(i64),
    Array(Vec<RespValue>),
    Null,
    NullArray,
    Error(String),
}

impl RespValue {
    /// Returns true for both nil encodings (`$-1` and `*-1`).
    pub fn is_nil(&self) -> bool {
        matches!(self, RespValue::Null | RespValue::NullArray)
    }

    /// Returns the integer payload, if this is an integer reply.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            RespValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the bytes of a bulk or simple string reply.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            RespValue::BulkString(b) => Some(b),
            RespValue::SimpleString(s) => Some(s.as_bytes()),
            _ => None,
        }
    }
}

impl From<i64> for RespValue {
    fn from(i: i64) -> Self {
        RespValue::Integer(i)
    }
}

impl From<Bytes> for RespValue {
    fn from(b: Bytes) -> Self {
        RespValue::BulkString(b)
    }
}

impl From<Option<Bytes>> for RespValue {
    fn from(b: Option<Bytes>) -> Self {
        b.map_or(RespValue::Null, RespValue::BulkString)
    }
}

impl From<Vec<Bytes>> for RespValue {
    fn from(items: Vec<Bytes>) -> Self {
        RespValue::Array(items.into_iter().map(RespValue::BulkString).collect())
    }
}
