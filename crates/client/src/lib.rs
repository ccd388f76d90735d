//! Elasticsearch delete client.
//!
//! This crate turns a runtime configuration into a time-bounded delete
//! query against a cluster's REST API: it resolves the time bounds, builds
//! the escaped delete and search URLs, counts the matching documents, and
//! executes the delete.

pub mod endpoints;
pub mod error;
pub mod http;
pub mod models;
pub mod query;
pub mod time;
pub mod url_encoding;

pub use endpoints::{count_matches, delete_matches};
pub use error::{ClientError, Result};
pub use http::build_http_client;
pub use models::{HitsTotal, SearchCountResponse, SearchHits};
pub use query::DeleteQuery;
pub use time::{ES_TIME_FORMAT, TimeError};
