//! Base URL resolution from the environment.
//!
//! Kept in its own test binary: it mutates `BLOCKID_TRUST_API_URL`.

use blockid_client::{resolve_base_url, TrustClient, DEFAULT_BASE_URL, TRUST_API_URL_ENV};

#[test]
fn base_url_precedence() {
    std::env::remove_var(TRUST_API_URL_ENV);
    assert_eq!(resolve_base_url(), DEFAULT_BASE_URL);
    let client = TrustClient::from_env().unwrap();
    assert_eq!(client.endpoint(), "http://localhost:8000/trust-score");

    std::env::set_var(TRUST_API_URL_ENV, "https://trust.blockid.io/");
    assert_eq!(resolve_base_url(), "https://trust.blockid.io/");
    let client = TrustClient::from_env().unwrap();
    assert_eq!(client.endpoint(), "https://trust.blockid.io/trust-score");

    let client = TrustClient::builder()
        .base_url("http://127.0.0.1:9000")
        .build()
        .unwrap();
    assert_eq!(client.endpoint(), "http://127.0.0.1:9000/trust-score");

    std::env::remove_var(TRUST_API_URL_ENV);
}
