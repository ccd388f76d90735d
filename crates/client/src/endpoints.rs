//! HTTP operations against the cluster.
//!
//! Responsibilities:
//! - The read-only GET that counts the documents a delete would match.
//! - The destructive DELETE itself.
//!
//! Does NOT handle:
//! - URL construction (see [`crate::query`]).
//! - Confirmation prompts and printing (CLI crate).

use reqwest::Client;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::SearchCountResponse;
use crate::query::DeleteQuery;

/// Count the documents the delete would match.
///
/// Issues a GET against the search variant of the query and reads the
/// top-level hit total from the JSON body.
pub async fn count_matches(client: &Client, query: &DeleteQuery) -> Result<u64> {
    let url = query.search_url();
    debug!(%url, "counting matching documents");

    let response = client
        .get(&url)
        .header("content-type", "application/json")
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ClientError::ApiError {
            status: status.as_u16(),
            url,
            message: excerpt(&body),
        });
    }

    let decoded: SearchCountResponse = serde_json::from_str(&body).map_err(|e| {
        ClientError::InvalidResponse(format!("no hit total in count response: {e}"))
    })?;
    let total = decoded.hits.total.value();
    debug!(total, "count lookup succeeded");
    Ok(total)
}

/// Execute the delete, returning the raw response body.
pub async fn delete_matches(client: &Client, query: &DeleteQuery) -> Result<String> {
    let url = query.delete_url();
    debug!(%url, "executing delete");

    let response = client
        .delete(&url)
        .header("content-type", "application/json")
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ClientError::ApiError {
            status: status.as_u16(),
            url,
            message: excerpt(&body),
        });
    }

    debug!(status = status.as_u16(), "delete acknowledged");
    Ok(body)
}

/// Trim a response body for inclusion in an error message.
fn excerpt(body: &str) -> String {
    const MAX_LEN: usize = 512;
    if body.len() <= MAX_LEN {
        return body.to_string();
    }
    let mut end = MAX_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
