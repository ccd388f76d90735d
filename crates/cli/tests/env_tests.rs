//! Integration tests for environment variable configuration.
//!
//! Responsibilities:
//! - Prove `ESD_SERVER` supplies the cluster address when `-s` is absent.
//! - Prove explicit flags take precedence over the environment.
//! - Prove `ESD_NOCONFIRM` enables unattended deletes and rejects junk.

mod common;

use common::{esd_cmd, server_host};
use predicates::prelude::*;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// `ESD_SERVER` fills in the cluster address.
#[test]
fn server_env_var_is_used_when_flag_is_absent() {
    esd_cmd()
        .env("ESD_SERVER", "es01.example:9200")
        .args(["-i", "logs", "-q"])
        .assert()
        .success()
        .stdout("http://es01.example:9200/logs/\n");
}

/// The `-s` flag wins over `ESD_SERVER`.
#[test]
fn server_flag_overrides_env_var() {
    esd_cmd()
        .env("ESD_SERVER", "ignored.example:9200")
        .args(["-i", "logs", "-q", "-s", "es02.example:9200"])
        .assert()
        .success()
        .stdout("http://es02.example:9200/logs/\n");
}

/// A blank `ESD_SERVER` counts as unset; the default server is used.
#[test]
fn blank_server_env_var_falls_back_to_default() {
    for blank in ["", "   "] {
        esd_cmd()
            .env("ESD_SERVER", blank)
            .args(["-i", "logs", "-q"])
            .assert()
            .success()
            .stdout("http://localhost:9200/logs/\n");
    }
}

/// A trailing slash on the server value does not double up in the URL.
#[test]
fn trailing_slash_on_server_is_trimmed() {
    esd_cmd()
        .args(["-i", "logs", "-q", "-s", "localhost:9200/"])
        .assert()
        .success()
        .stdout("http://localhost:9200/logs/\n");
}

/// `ESD_NOCONFIRM=1` skips the count and prompt like `-n` does.
#[tokio::test]
async fn noconfirm_env_var_skips_the_prompt() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let host = server_host(&server);
    esd_cmd()
        .env("ESD_NOCONFIRM", "1")
        .args(["-i", "logs", "-s", &host])
        .assert()
        .success()
        .stdout("");
}

/// Unrecognized `ESD_NOCONFIRM` values are reported; nothing runs.
#[test]
fn junk_noconfirm_value_is_rejected() {
    esd_cmd()
        .env("ESD_NOCONFIRM", "maybe")
        .args(["-i", "logs", "-q", "-s", "localhost:1"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("ESD_NOCONFIRM"));
}
