//! Data models for cluster API responses.

use serde::Deserialize;

/// Total-hits field of a search response.
///
/// Classic clusters return a bare integer; newer ones return an object
/// carrying `value` and a `relation` the count ignores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum HitsTotal {
    Count(u64),
    Tracked { value: u64 },
}

impl HitsTotal {
    /// The number of matching documents.
    pub fn value(&self) -> u64 {
        match *self {
            HitsTotal::Count(count) => count,
            HitsTotal::Tracked { value } => value,
        }
    }
}

/// Hits section of a search response; only the total is read.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHits {
    pub total: HitsTotal,
}

/// Search response reduced to the fields the count lookup needs.
///
/// The wire format also carries a shard-level `total`; the document count
/// is `hits.total` and nothing else is modeled.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchCountResponse {
    pub hits: SearchHits,
}
