//! Runtime configuration types for esd.
//!
//! Responsibilities:
//! - Define the immutable `Config` consumed by the client and CLI crates.
//! - Define `TimeSpec`, the two-variant representation of one logical time
//!   bound.
//!
//! Does NOT handle:
//! - Loading from environment variables or `.env` files (see `loader`).
//! - Time-bound resolution or URL construction (client crate).
//!
//! Invariants:
//! - A bound is either an absolute stamp or a relative duration, never
//!   both; the type makes the illegal pair unrepresentable.
//! - `index` and `doc_type` are `None` when absent or empty; empty strings
//!   never reach the URL builder.
//! - `server` carries no trailing slash once built.

use serde::{Deserialize, Serialize};

/// Server used when neither the flag nor the environment provides one.
pub const DEFAULT_SERVER: &str = "localhost:9200";

/// One logical time bound for the delete filter.
///
/// `Stamp` carries an absolute timestamp to validate and pass through
/// unchanged; `Ago` carries a relative duration such as `30s` or `7d` to
/// resolve against the current time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeSpec {
    Stamp(String),
    Ago(String),
}

/// Immutable runtime configuration, built once by `ConfigLoader` and passed
/// explicitly to everything that needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Index to delete from; `None` targets all indices.
    pub index: Option<String>,
    /// Document type to delete from; `None` targets all types.
    pub doc_type: Option<String>,
    /// Host and port of the cluster, e.g. `localhost:9200`.
    pub server: String,
    /// Lower time bound (documents newer than this match).
    pub from: Option<TimeSpec>,
    /// Upper time bound (documents older than this match).
    pub to: Option<TimeSpec>,
    /// Skip the count-and-confirm step.
    pub no_confirm: bool,
    /// Print the generated URL and exit without any network call.
    pub query_only: bool,
    /// Print the delete response body.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index: None,
            doc_type: None,
            server: DEFAULT_SERVER.to_string(),
            from: None,
            to: None,
            no_confirm: false,
            query_only: false,
            verbose: false,
        }
    }
}
