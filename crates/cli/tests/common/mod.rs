//! Shared test utilities for esd integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Keep host environment variables from leaking into test runs.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.

use assert_cmd::Command;

/// Returns a hermetic `esd` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `ESD_*` variables are cleared so host values cannot leak in.
#[allow(dead_code)]
pub fn esd_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("esd");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("ESD_SERVER")
        .env_remove("ESD_NOCONFIRM")
        .env_remove("RUST_LOG");

    cmd
}

/// Host:port of a mock server, in the form the `-s` flag expects.
#[allow(dead_code)]
pub fn server_host(server: &wiremock::MockServer) -> String {
    server
        .uri()
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .to_string()
}
