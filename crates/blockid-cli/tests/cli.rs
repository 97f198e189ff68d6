use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn blockid(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("blockid").unwrap();
    cmd.env_remove("BLOCKID_TRUST_API_URL")
        .env_remove("RUST_LOG")
        .env("BLOCKID_CONFIG", config_dir.path().join("config.toml"));
    cmd
}

#[test]
fn empty_wallet_rejected() {
    let dir = TempDir::new().unwrap();
    blockid(&dir)
        .args(["score", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wallet address is required"));
}

#[test]
fn config_set_then_show() {
    let dir = TempDir::new().unwrap();
    blockid(&dir)
        .args(["config", "set", "api_url", "https://trust.blockid.io"])
        .assert()
        .success();

    blockid(&dir)
        .args(["-o", "json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://trust.blockid.io"));
}

#[test]
fn config_unknown_key_fails() {
    let dir = TempDir::new().unwrap();
    blockid(&dir)
        .args(["config", "set", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[tokio::test(flavor = "multi_thread")]
async fn score_json_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/trust-score"))
        .and(body_json(json!({ "wallet": "ABC123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "wallet": "ABC123",
            "trust_score": 81,
            "risk_level": "Low",
            "metrics": {
                "tx_count": 10,
                "wallet_age_months": 3,
                "activity_score": 40.5,
                "risk_flags": []
            }
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    blockid(&dir)
        .args(["--api-url", &format!("{}/", server.uri()), "-o", "json", "score", "  ABC123  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"risk_level\": \"Low\""))
        .stdout(predicate::str::contains("activity_level").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn score_unavailable_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/trust-score"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    blockid(&dir)
        .env("BLOCKID_TRUST_API_URL", server.uri())
        .args(["-o", "json", "score", "ABC123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Trust API unavailable"));
}

#[test]
fn zero_timeout_flag_rejected() {
    let dir = TempDir::new().unwrap();
    blockid(&dir)
        .args(["score", "--timeout", "0", "ABC123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--timeout"));
}
