//! Common test utilities for integration tests.
//!
//! Shared helpers for driving the client against a wiremock server: a fixed
//! clock so resolved bounds are deterministic, and conversion of a mock
//! server URI into the host:port form the query builder expects.

use chrono::{NaiveDate, NaiveDateTime};
use esd_config::{Config, TimeSpec};
use wiremock::MockServer;

/// Fixed "now" used by tests that resolve relative bounds.
#[allow(dead_code)]
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2014, 7, 24)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Host:port of a mock server, as the `server` config field expects.
#[allow(dead_code)]
pub fn server_host(server: &MockServer) -> String {
    server
        .uri()
        .strip_prefix("http://")
        .expect("mock server uri is http")
        .to_string()
}

/// Config targeting the mock server's `logs` index with a 24h lower bound.
#[allow(dead_code)]
pub fn bounded_config(server: &MockServer) -> Config {
    Config {
        index: Some("logs".to_string()),
        server: server_host(server),
        from: Some(TimeSpec::Ago("24h".to_string())),
        ..Config::default()
    }
}

/// Config targeting the mock server's `logs` index with no time bounds.
#[allow(dead_code)]
pub fn plain_config(server: &MockServer) -> Config {
    Config {
        index: Some("logs".to_string()),
        server: server_host(server),
        ..Config::default()
    }
}
