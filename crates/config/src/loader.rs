//! Configuration loader for environment variables and flags.
//!
//! Responsibilities:
//! - Load `.env` files behind the `DOTENV_DISABLED` gate.
//! - Read `ESD_*` environment variables with empty/whitespace filtering.
//! - Layer flag values over environment values over defaults and produce
//!   the immutable `Config`.
//!
//! Does NOT handle:
//! - Flag parsing (CLI crate).
//! - Validation of time bounds (client crate resolves them).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called before flag parsing so `.env` values
//!   are visible to flag env fallbacks.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()`
//!   is called.
//! - Empty or whitespace-only environment variables are treated as unset.

use crate::error::ConfigError;
use crate::types::{Config, DEFAULT_SERVER, TimeSpec};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse a boolean-ish environment value (`1/true/yes/on`, case-insensitive).
fn parse_env_flag(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be a boolean such as 1/0, true/false, yes/no, on/off".to_string(),
        }),
    }
}

/// Configuration loader that builds config from environment variables and
/// flag overrides.
#[derive(Debug)]
pub struct ConfigLoader {
    index: Option<String>,
    doc_type: Option<String>,
    server: Option<String>,
    from: Option<TimeSpec>,
    to: Option<TimeSpec>,
    no_confirm: Option<bool>,
    query_only: Option<bool>,
    verbose: Option<bool>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self {
            index: None,
            doc_type: None,
            server: None,
            from: None,
            to: None,
            no_confirm: None,
            query_only: None,
            verbose: None,
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file will not
    /// be loaded (useful for testing). Missing `.env` files are silently
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax
    /// (`ConfigError::DotenvParse`) or cannot be read
    /// (`ConfigError::DotenvIo`). Error messages never include raw `.env`
    /// line contents.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from `ESD_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        if let Some(server) = env_var_or_none("ESD_SERVER") {
            self.server = Some(server);
        }
        if let Some(raw) = env_var_or_none("ESD_NOCONFIRM") {
            self.no_confirm = Some(parse_env_flag("ESD_NOCONFIRM", &raw)?);
        }
        Ok(self)
    }

    /// Set the index to delete from.
    pub fn with_index(mut self, index: String) -> Self {
        self.index = Some(index);
        self
    }

    /// Set the document type to delete from.
    pub fn with_doc_type(mut self, doc_type: String) -> Self {
        self.doc_type = Some(doc_type);
        self
    }

    /// Set the server (host and port).
    pub fn with_server(mut self, server: String) -> Self {
        self.server = Some(server);
        self
    }

    /// Set the lower time bound.
    pub fn with_from(mut self, from: TimeSpec) -> Self {
        self.from = Some(from);
        self
    }

    /// Set the upper time bound.
    pub fn with_to(mut self, to: TimeSpec) -> Self {
        self.to = Some(to);
        self
    }

    /// Skip the count-and-confirm step.
    pub fn with_no_confirm(mut self, no_confirm: bool) -> Self {
        self.no_confirm = Some(no_confirm);
        self
    }

    /// Print the generated URL and exit without issuing any request.
    pub fn with_query_only(mut self, query_only: bool) -> Self {
        self.query_only = Some(query_only);
        self
    }

    /// Print the delete response body after execution.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Build the final immutable configuration.
    ///
    /// Applies defaults and normalization: empty index/type values are
    /// treated as absent; the server falls back to the default when blank
    /// and loses any trailing slashes.
    pub fn build(self) -> Config {
        Config {
            index: self.index.filter(|s| !s.is_empty()),
            doc_type: self.doc_type.filter(|s| !s.is_empty()),
            server: normalize_server(
                self.server
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .unwrap_or(DEFAULT_SERVER),
            ),
            from: self.from,
            to: self.to,
            no_confirm: self.no_confirm.unwrap_or(false),
            query_only: self.query_only.unwrap_or(false),
            verbose: self.verbose.unwrap_or(false),
        }
    }
}

/// Normalize a server value by trimming trailing slashes.
fn normalize_server(server: &str) -> String {
    server.trim_end_matches('/').to_string()
}
