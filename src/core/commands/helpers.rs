// src/core/commands/helpers.rs

//! Argument canonicalization shared by every list command.
//!
//! Building goes through [`IntoArg`], which turns strings, byte buffers and
//! integers into a single `Bytes` token. Parsing goes the other way and uses the
//! small extractors at the bottom of this module, which keep error reporting
//! consistent across commands.

use crate::core::CommandError;
use bytes::Bytes;
use std::str::FromStr;

/// Converts a caller-supplied argument into one command token.
///
/// Strings and byte buffers are passed through verbatim. Integers are rendered
/// in base 10 without padding or sign for non-negative values.
pub trait IntoArg {
    fn into_arg(self) -> Bytes;
}

impl IntoArg for Bytes {
    fn into_arg(self) -> Bytes {
        self
    }
}

impl IntoArg for &Bytes {
    fn into_arg(self) -> Bytes {
        self.clone()
    }
}

impl IntoArg for String {
    fn into_arg(self) -> Bytes {
        Bytes::from(self)
    }
}

impl IntoArg for &String {
    fn into_arg(self) -> Bytes {
        Bytes::copy_from_slice(self.as_bytes())
    }
}

impl IntoArg for &str {
    fn into_arg(self) -> Bytes {
        Bytes::copy_from_slice(self.as_bytes())
    }
}

impl IntoArg for &&str {
    fn into_arg(self) -> Bytes {
        Bytes::copy_from_slice(self.as_bytes())
    }
}

impl IntoArg for Vec<u8> {
    fn into_arg(self) -> Bytes {
        Bytes::from(self)
    }
}

impl IntoArg for &[u8] {
    fn into_arg(self) -> Bytes {
        Bytes::copy_from_slice(self)
    }
}

impl<const N: usize> IntoArg for &[u8; N] {
    fn into_arg(self) -> Bytes {
        Bytes::copy_from_slice(self)
    }
}

macro_rules! impl_into_arg_for_integers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoArg for $ty {
                fn into_arg(self) -> Bytes {
                    let mut buffer = itoa::Buffer::new();
                    Bytes::copy_from_slice(buffer.format(self).as_bytes())
                }
            }

            impl IntoArg for &$ty {
                fn into_arg(self) -> Bytes {
                    (*self).into_arg()
                }
            }
        )*
    };
}

impl_into_arg_for_integers!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Flattens any collection of arguments into tokens, preserving caller order.
///
/// Fixed arrays, slices, vectors and lazy iterators all land here, so every
/// shape a caller can pass produces the same token sequence.
pub fn collect_args<I>(items: I) -> Vec<Bytes>
where
    I: IntoIterator,
    I::Item: IntoArg,
{
    items.into_iter().map(IntoArg::into_arg).collect()
}

/// Formats an integer token the same way [`IntoArg`] does.
pub fn int_token(value: i64) -> Bytes {
    value.into_arg()
}

/// Extracts a UTF-8 `&str` from a token.
pub fn extract_str(token: &Bytes) -> Result<&str, CommandError> {
    Ok(std::str::from_utf8(token)?)
}

/// Parses a token as an integer of type `T`.
pub fn parse_integer<T: FromStr>(token: &Bytes) -> Result<T, CommandError> {
    extract_str(token)?
        .parse()
        .map_err(|_| CommandError::NotAnInteger)
}

/// Validates that the number of arguments matches an exact expected count.
pub fn validate_arg_count(args: &[Bytes], expected: usize, cmd: &str) -> Result<(), CommandError> {
    if args.len() != expected {
        Err(CommandError::WrongArgumentCount(cmd.to_string()))
    } else {
        Ok(())
    }
}

/// Parses arguments for commands that follow the pattern `COMMAND key [value ...]`.
///
/// Only the key is mandatory; an empty value list is accepted because the
/// builders accept it too.
pub fn parse_key_and_values(args: &[Bytes], cmd: &str) -> Result<(Bytes, Vec<Bytes>), CommandError> {
    let Some((key, values)) = args.split_first() else {
        return Err(CommandError::WrongArgumentCount(cmd.to_string()));
    };
    Ok((key.clone(), values.to_vec()))
}

/// Splits `COMMAND key [count]`, keeping the count token verbatim.
pub fn parse_key_and_optional_count(
    args: &[Bytes],
    cmd: &str,
) -> Result<(Bytes, Option<Bytes>), CommandError> {
    match args {
        [key] => Ok((key.clone(), None)),
        [key, count] => Ok((key.clone(), Some(count.clone()))),
        _ => Err(CommandError::WrongArgumentCount(cmd.to_string())),
    }
}
