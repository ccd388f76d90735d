//! Time-bound resolution for delete filters.
//!
//! Responsibilities:
//! - Resolve relative durations (`30s`, `15m`, `24h`, `7d`) to `now minus
//!   duration` in the cluster's timestamp format.
//! - Validate absolute stamps against that format, passing them through
//!   unchanged.
//!
//! Does NOT handle:
//! - Deciding which bound is present (the config's `TimeSpec` does).
//! - Embedding bounds into filter clauses (see [`crate::query`]).
//!
//! Invariants:
//! - "Now" is the caller's clock; this module never reads the system time,
//!   so resolution is deterministic under test.
//! - Bounds are formatted with a literal `.000Z` suffix on naive local
//!   time, exactly as the cluster filters expect them.
//! - The `TimeError` display strings are printed verbatim by the CLI; they
//!   are part of the tool's text contract.

use chrono::{NaiveDateTime, TimeDelta};
use thiserror::Error;

use esd_config::TimeSpec;

/// Timestamp format used for filter bounds.
pub const ES_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.000Z";

/// Errors produced while resolving a time bound.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// Relative duration did not match `<n><unit>` with unit in s/m/h/d
    /// and n >= 1.
    #[error("Improper timedelta: '{0}'; use format n{{s,m,h,d}}")]
    ImproperDelta(String),

    /// Absolute stamp did not parse as `YYYY-MM-DDTHH:MM:SS.000Z`.
    #[error("Invalid timestamp: '{0}' is not a valid date.")]
    InvalidStamp(String),
}

/// Resolve one logical bound to its canonical timestamp string.
pub fn resolve(spec: &TimeSpec, now: NaiveDateTime) -> Result<String, TimeError> {
    match spec {
        TimeSpec::Stamp(stamp) => validate_stamp(stamp),
        TimeSpec::Ago(ago) => resolve_ago(ago, now),
    }
}

/// Resolve a relative duration such as `30s`, `15m`, `24h`, or `7d` to the
/// timestamp `now - duration`.
///
/// The grammar is a leading run of digits followed by a unit letter;
/// anything after the unit letter is ignored, so `24hours` reads as `24h`.
/// The unit is case-insensitive.
pub fn resolve_ago(ago: &str, now: NaiveDateTime) -> Result<String, TimeError> {
    let improper = || TimeError::ImproperDelta(ago.to_string());

    let digit_count = ago.chars().take_while(|c| c.is_ascii_digit()).count();
    if digit_count == 0 {
        return Err(improper());
    }
    let (digits, rest) = ago.split_at(digit_count);
    let unit = rest
        .chars()
        .next()
        .filter(|c| c.is_ascii_alphabetic())
        .ok_or_else(improper)?;

    let n: i64 = digits.parse().map_err(|_| improper())?;
    if n < 1 {
        return Err(improper());
    }
    let seconds_per_unit: i64 = match unit.to_ascii_lowercase() {
        's' => 1,
        'm' => 60,
        'h' => 3_600,
        'd' => 86_400,
        _ => return Err(improper()),
    };

    // Out-of-range durations land on the same malformed-duration path.
    let seconds = n.checked_mul(seconds_per_unit).ok_or_else(improper)?;
    let delta = TimeDelta::try_seconds(seconds).ok_or_else(improper)?;
    let resolved = now.checked_sub_signed(delta).ok_or_else(improper)?;
    Ok(resolved.format(ES_TIME_FORMAT).to_string())
}

/// Validate an absolute timestamp, returning it unchanged when it already
/// matches the cluster format and names a real date.
pub fn validate_stamp(stamp: &str) -> Result<String, TimeError> {
    NaiveDateTime::parse_from_str(stamp, ES_TIME_FORMAT)
        .map_err(|_| TimeError::InvalidStamp(stamp.to_string()))?;
    Ok(stamp.to_string())
}
