//! Delete pipeline: resolve bounds, show the URL, count, confirm, delete.
//!
//! Responsibilities:
//! - Drive the straight-line flow from configuration to the DELETE call.
//! - Own the stdout contract: validation messages, the generated URL, and
//!   the verbose response body go to stdout; diagnostics go to stderr.
//!
//! Does NOT handle:
//! - Flag parsing or the process exit policy (see `main`).
//! - Prompt wording (see `interactive`).

use anyhow::{Context, Result};
use chrono::Local;
use esd_client::{DeleteQuery, build_http_client, count_matches, delete_matches};
use esd_config::Config;
use tracing::debug;

use crate::interactive;

/// Execute one delete run against the configured cluster.
///
/// Bound validation failures are part of the normal output contract: the
/// message is printed to stdout and the run ends successfully. Errors
/// returned from here are operational (HTTP, malformed responses) and are
/// reported by the caller.
pub async fn run(config: &Config) -> Result<()> {
    let query = match DeleteQuery::from_config(config, Local::now().naive_local()) {
        Ok(query) => query,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    let url = query.delete_url();
    debug!(%url, "generated delete url");

    if config.query_only {
        println!("{url}");
        return Ok(());
    }

    let client = build_http_client().context("failed to build HTTP client")?;

    if !config.no_confirm {
        println!("Generated url is:\n{url}");
        let total = count_matches(&client, &query)
            .await
            .context("failed to count matching records")?;
        if !interactive::confirm_delete(total)? {
            return Ok(());
        }
    }

    let body = delete_matches(&client, &query)
        .await
        .context("delete request failed")?;
    debug!("delete request completed");

    if config.verbose {
        println!("{body}");
    }

    Ok(())
}
