//! Delete-query construction.
//!
//! Responsibilities:
//! - Resolve a runtime configuration into the target path, endpoint, and
//!   timestamp filter.
//! - Assemble the delete URL and its read-only search twin.
//!
//! Does NOT handle:
//! - Duration/stamp grammar (see [`crate::time`]).
//! - Issuing requests (see [`crate::endpoints`]).
//!
//! Invariants:
//! - The delete and search URLs are built from the same resolved fields;
//!   one is never derived from the other's text.
//! - `:` is escaped as `\:` inside bound values only; the `+@timestamp:`
//!   prefix keeps its bare colon.
//! - Only the text after the last `/` is percent-encoded.

use chrono::NaiveDateTime;

use esd_config::Config;

use crate::time::{self, TimeError};
use crate::url_encoding::encode_trailing_segment;

/// A fully resolved delete query: everything needed to address the records
/// to remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteQuery {
    server: String,
    index: Option<String>,
    doc_type: Option<String>,
    from: Option<String>,
    to: Option<String>,
}

impl DeleteQuery {
    /// Resolve a runtime configuration into a delete query, validating
    /// absolute stamps and resolving relative durations against `now`.
    pub fn from_config(config: &Config, now: NaiveDateTime) -> Result<Self, TimeError> {
        let from = config
            .from
            .as_ref()
            .map(|spec| time::resolve(spec, now))
            .transpose()?;
        let to = config
            .to
            .as_ref()
            .map(|spec| time::resolve(spec, now))
            .transpose()?;
        tracing::debug!(?from, ?to, "resolved time bounds");
        Ok(Self {
            server: config.server.clone(),
            index: config.index.clone(),
            doc_type: config.doc_type.clone(),
            from,
            to,
        })
    }

    /// URL receiving the destructive DELETE.
    ///
    /// Bound-less queries delete the plain path; any bound switches to the
    /// `_query` endpoint with a timestamp filter.
    pub fn delete_url(&self) -> String {
        let endpoint = if self.has_bounds() {
            "_query?pretty&q="
        } else {
            ""
        };
        let url = format!(
            "http://{}{}{}{}",
            self.server,
            self.path(),
            endpoint,
            self.filter()
        );
        encode_trailing_segment(&url)
    }

    /// URL for the read-only count of matching documents: same target,
    /// `_search` endpoint.
    pub fn search_url(&self) -> String {
        let query = if self.has_bounds() {
            format!("&q={}", self.filter())
        } else {
            String::new()
        };
        let url = format!(
            "http://{}{}_search?pretty{}",
            self.server,
            self.path(),
            query
        );
        encode_trailing_segment(&url)
    }

    fn has_bounds(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Path shape: index only, type only, both, neither.
    fn path(&self) -> String {
        match (self.index.as_deref(), self.doc_type.as_deref()) {
            (Some(index), None) => format!("/{index}/"),
            (None, Some(doc_type)) => format!("/*/{doc_type}/"),
            (Some(index), Some(doc_type)) => format!("/{index}/{doc_type}/"),
            (None, None) => "/".to_string(),
        }
    }

    /// Timestamp-range clause with `:` escaped as `\:` inside the bounds.
    fn filter(&self) -> String {
        fn escape(bound: &str) -> String {
            bound.replace(':', "\\:")
        }
        match (self.from.as_deref(), self.to.as_deref()) {
            (Some(from), None) => format!("+@timestamp:>{}", escape(from)),
            (None, Some(to)) => format!("+@timestamp:<{}", escape(to)),
            (Some(from), Some(to)) => {
                format!("+@timestamp:>{} +@timestamp:<{}", escape(from), escape(to))
            }
            (None, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use esd_config::TimeSpec;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2014, 7, 24)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn config(index: Option<&str>, doc_type: Option<&str>) -> Config {
        Config {
            index: index.map(str::to_string),
            doc_type: doc_type.map(str::to_string),
            ..Config::default()
        }
    }

    #[test]
    fn path_covers_all_four_shapes() {
        let cases = [
            (Some("logs"), None, "http://localhost:9200/logs/"),
            (None, Some("event"), "http://localhost:9200/*/event/"),
            (
                Some("logs"),
                Some("event"),
                "http://localhost:9200/logs/event/",
            ),
            (None, None, "http://localhost:9200/"),
        ];
        for (index, doc_type, expected) in cases {
            let query = DeleteQuery::from_config(&config(index, doc_type), fixed_now()).unwrap();
            assert_eq!(query.delete_url(), expected);
        }
    }

    #[test]
    fn from_bound_builds_escaped_query() {
        let mut config = config(Some("logs"), None);
        config.from = Some(TimeSpec::Ago("24h".to_string()));
        let query = DeleteQuery::from_config(&config, fixed_now()).unwrap();
        assert_eq!(
            query.delete_url(),
            r"http://localhost:9200/logs/_query?pretty&q=%2B@timestamp:>2014-07-23T00\:00\:00.000Z"
        );
    }

    #[test]
    fn to_bound_uses_less_than_operator() {
        let mut config = config(Some("logs"), None);
        config.to = Some(TimeSpec::Stamp("2014-07-23T00:00:00.000Z".to_string()));
        let query = DeleteQuery::from_config(&config, fixed_now()).unwrap();
        assert_eq!(
            query.delete_url(),
            r"http://localhost:9200/logs/_query?pretty&q=%2B@timestamp:<2014-07-23T00\:00\:00.000Z"
        );
    }

    #[test]
    fn both_bounds_join_with_encoded_space() {
        let mut config = config(Some("logs"), Some("event"));
        config.from = Some(TimeSpec::Stamp("2014-07-20T00:00:00.000Z".to_string()));
        config.to = Some(TimeSpec::Stamp("2014-07-23T12:30:45.000Z".to_string()));
        let query = DeleteQuery::from_config(&config, fixed_now()).unwrap();
        assert_eq!(
            query.delete_url(),
            r"http://localhost:9200/logs/event/_query?pretty&q=%2B@timestamp:>2014-07-20T00\:00\:00.000Z%20%2B@timestamp:<2014-07-23T12\:30\:45.000Z"
        );
    }

    #[test]
    fn search_url_mirrors_delete_target() {
        let mut config = config(Some("logs"), None);
        config.from = Some(TimeSpec::Ago("24h".to_string()));
        let query = DeleteQuery::from_config(&config, fixed_now()).unwrap();
        assert_eq!(
            query.search_url(),
            r"http://localhost:9200/logs/_search?pretty&q=%2B@timestamp:>2014-07-23T00\:00\:00.000Z"
        );
    }

    #[test]
    fn search_url_without_bounds_still_counts() {
        let query = DeleteQuery::from_config(&config(Some("logs"), None), fixed_now()).unwrap();
        assert_eq!(query.search_url(), "http://localhost:9200/logs/_search?pretty");
    }

    #[test]
    fn index_containing_query_is_not_mangled() {
        let mut config = config(Some("queryable"), None);
        config.from = Some(TimeSpec::Ago("24h".to_string()));
        let query = DeleteQuery::from_config(&config, fixed_now()).unwrap();
        assert!(query.search_url().starts_with("http://localhost:9200/queryable/_search?"));
        assert!(query.delete_url().starts_with("http://localhost:9200/queryable/_query?"));
    }

    #[test]
    fn invalid_bound_surfaces_time_error() {
        let mut config = config(Some("logs"), None);
        config.from = Some(TimeSpec::Ago("yesterday".to_string()));
        assert_eq!(
            DeleteQuery::from_config(&config, fixed_now()),
            Err(TimeError::ImproperDelta("yesterday".to_string()))
        );
    }

    #[test]
    fn custom_server_is_used_verbatim() {
        let mut config = config(Some("logs"), None);
        config.server = "es.example.com:9200".to_string();
        let query = DeleteQuery::from_config(&config, fixed_now()).unwrap();
        assert_eq!(query.delete_url(), "http://es.example.com:9200/logs/");
    }
}
