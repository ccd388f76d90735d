//! HTTP client construction.
//!
//! One client serves the whole run. It keeps no idle connections (each of
//! the at-most-two requests opens a fresh one) and sets no timeout: a hang
//! in either call blocks the process, which is the tool's documented
//! resource model.

use reqwest::Client;

use crate::error::Result;

/// Build the HTTP client used for both the count lookup and the delete.
pub fn build_http_client() -> Result<Client> {
    let client = Client::builder().pool_max_idle_per_host(0).build()?;
    Ok(client)
}
