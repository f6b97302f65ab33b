// src/core/commands/timeout.rs

//! Canonicalization of blocking-command timeouts.
//!
//! The store reads a timeout as a number of seconds that may carry a fractional
//! part. Callers can hand us a `Duration`, an integer, a float, or a string they
//! already formatted; all four converge on one token so that equal magnitudes
//! always produce byte-identical commands.

use crate::core::CommandError;
use bytes::Bytes;
use std::time::Duration;

/// The accepted representations of a blocking timeout, in seconds.
///
/// A value of zero asks the store to block indefinitely.
#[derive(Debug, Clone, PartialEq)]
pub enum Timeout {
    Duration(Duration),
    Seconds(i64),
    Float(f64),
    Formatted(String),
}

impl Timeout {
    /// Normalizes the timeout into its seconds token.
    ///
    /// The token is a plain decimal: no exponent, no sign on non-negative
    /// values, no leading zeros and no trailing fractional zeros, so values
    /// without a fractional part carry no decimal point (`1.0` becomes `1`).
    /// Durations and decimal strings are rendered exactly; floats use the
    /// shortest digits that round-trip. Non-finite floats and strings that are
    /// not numbers are rejected here, so a malformed token never reaches the
    /// store.
    pub fn to_token(&self) -> Result<Bytes, CommandError> {
        let token = match self {
            Timeout::Duration(d) => duration_token(*d),
            Timeout::Seconds(secs) => {
                let mut buffer = itoa::Buffer::new();
                buffer.format(*secs).to_owned()
            }
            Timeout::Float(secs) => float_token(*secs)?,
            Timeout::Formatted(s) => formatted_token(s)?,
        };
        Ok(Bytes::from(token))
    }
}

fn duration_token(d: Duration) -> String {
    let mut buffer = itoa::Buffer::new();
    let secs = buffer.format(d.as_secs());
    match d.subsec_nanos() {
        0 => secs.to_owned(),
        nanos => {
            let fraction = format!("{nanos:09}");
            format!("{secs}.{}", fraction.trim_end_matches('0'))
        }
    }
}

fn float_token(secs: f64) -> Result<String, CommandError> {
    if !secs.is_finite() {
        return Err(CommandError::NonFiniteTimeout(secs));
    }
    let mut buffer = ryu::Buffer::new();
    let shortest = buffer.format_finite(secs);
    let plain = match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent
                .parse()
                .map_err(|_| CommandError::InvalidTimeout(shortest.to_owned()))?;
            shift_point(mantissa, exponent)
        }
        None => shortest.to_owned(),
    };
    canonical_decimal(&plain).ok_or(CommandError::InvalidTimeout(plain))
}

fn formatted_token(s: &str) -> Result<String, CommandError> {
    if let Some(token) = canonical_decimal(s) {
        return Ok(token);
    }
    // Exponent forms and `inf`/`nan` go through the float path.
    let secs: f64 = s
        .parse()
        .map_err(|_| CommandError::InvalidTimeout(s.to_owned()))?;
    float_token(secs)
}

/// Rewrites a plain decimal literal (`[+-]digits[.digits]`) in canonical form.
/// Returns `None` for anything else, including exponent notation.
fn canonical_decimal(s: &str) -> Option<String> {
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let int_part = int_part.trim_start_matches('0');
    let frac_part = frac_part.trim_end_matches('0');
    let mut token = String::with_capacity(int_part.len() + frac_part.len() + 3);
    if negative && !(int_part.is_empty() && frac_part.is_empty()) {
        token.push('-');
    }
    token.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        token.push('.');
        token.push_str(frac_part);
    }
    Some(token)
}

/// Expands `mantissa * 10^exponent` (as printed by `ryu`) into a plain decimal.
fn shift_point(mantissa: &str, exponent: i32) -> String {
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let (int_digits, frac_digits) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = format!("{int_digits}{frac_digits}");
    let point = int_digits.len() as i64 + i64::from(exponent);

    if point <= 0 {
        format!("{sign}0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else if point as usize >= digits.len() {
        format!("{sign}{digits}{}", "0".repeat(point as usize - digits.len()))
    } else {
        let (whole, fraction) = digits.split_at(point as usize);
        format!("{sign}{whole}.{fraction}")
    }
}

impl From<Duration> for Timeout {
    fn from(d: Duration) -> Self {
        Timeout::Duration(d)
    }
}

impl From<i64> for Timeout {
    fn from(secs: i64) -> Self {
        Timeout::Seconds(secs)
    }
}

impl From<i32> for Timeout {
    fn from(secs: i32) -> Self {
        Timeout::Seconds(secs.into())
    }
}

impl From<u32> for Timeout {
    fn from(secs: u32) -> Self {
        Timeout::Seconds(secs.into())
    }
}

impl From<u64> for Timeout {
    fn from(secs: u64) -> Self {
        match i64::try_from(secs) {
            Ok(secs) => Timeout::Seconds(secs),
            Err(_) => Timeout::Formatted(secs.to_string()),
        }
    }
}

impl From<f64> for Timeout {
    fn from(secs: f64) -> Self {
        Timeout::Float(secs)
    }
}

impl From<f32> for Timeout {
    fn from(secs: f32) -> Self {
        Timeout::Float(secs.into())
    }
}

impl From<&str> for Timeout {
    fn from(s: &str) -> Self {
        Timeout::Formatted(s.to_owned())
    }
}

impl From<String> for Timeout {
    fn from(s: String) -> Self {
        Timeout::Formatted(s)
    }
}
