//! Configuration management for esd.
//!
//! This crate provides the immutable runtime configuration for the delete
//! tool and a loader that layers command-line values over environment
//! variables and defaults.

mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use loader::{ConfigLoader, env_var_or_none};
pub use types::{Config, DEFAULT_SERVER, TimeSpec};
