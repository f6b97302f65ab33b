// src/core/commands/list/logic.rs

//! Token layouts shared by several list commands.

use crate::core::CommandError;
use crate::core::commands::helpers::extract_str;
use crate::core::commands::timeout::Timeout;
use bytes::Bytes;

/// Lays out `key [key ...] timeout`. The timeout is always the final token.
pub(crate) fn keys_then_timeout(keys: &[Bytes], timeout: &Bytes) -> Vec<Bytes> {
    let mut args = Vec::with_capacity(keys.len() + 1);
    args.extend(keys.iter().cloned());
    args.push(timeout.clone());
    args
}

/// Splits `key [key ...] timeout`, re-normalizing the timeout token.
///
/// Zero keys is accepted; only the timeout is required to rebuild the command.
pub(crate) fn parse_keys_then_timeout(
    args: &[Bytes],
    cmd: &str,
) -> Result<(Vec<Bytes>, Bytes), CommandError> {
    let Some((timeout, keys)) = args.split_last() else {
        return Err(CommandError::WrongArgumentCount(cmd.to_string()));
    };
    Ok((keys.to_vec(), parse_timeout(timeout)?))
}

/// Re-normalizes a timeout token read back from a command.
pub(crate) fn parse_timeout(token: &Bytes) -> Result<Bytes, CommandError> {
    Timeout::Formatted(extract_str(token)?.to_owned()).to_token()
}

/// Appends the optional count of `LPOP`/`RPOP` only when one was supplied.
pub(crate) fn key_then_optional_count(key: &Bytes, count: Option<&Bytes>) -> Vec<Bytes> {
    let mut args = vec![key.clone()];
    if let Some(count) = count {
        args.push(count.clone());
    }
    args
}

/// Lays out `key value [value ...]`.
pub(crate) fn key_then_values(key: &Bytes, values: &[Bytes]) -> Vec<Bytes> {
    let mut args = Vec::with_capacity(values.len() + 1);
    args.push(key.clone());
    args.extend(values.iter().cloned());
    args
}
