//! End-to-end tests wiring configuration, the client, retries, and timing
//! together the way an application would.

use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

use bookstack_api::rest::{Filters, Listable, Readable};
use bookstack_api::timing::measure;
use bookstack_api::{BookStackConfig, ConfigError, RestClient, RetryPolicy};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

// ============================================================================
// Configuration
// ============================================================================

#[tokio::test]
async fn test_config_from_lookup_drives_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books/1"))
        .and(header("Authorization", "Token abc:xyz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "Guide"})))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let config = BookStackConfig::from_lookup(lookup(&[
        ("BOOKSTACK_URL", uri.as_str()),
        ("BOOKSTACK_TOKEN_ID", "abc"),
        ("BOOKSTACK_TOKEN_SECRET", "xyz"),
        ("BOOKSTACK_TIMEOUT", "5"),
    ]))
    .unwrap();
    assert_eq!(config.timeout(), Duration::from_secs(5));

    let client = RestClient::new(&config).unwrap();
    let book = client.books().read(1).await.unwrap();
    assert_eq!(book["name"], "Guide");
}

#[test]
fn test_config_from_lookup_reports_every_problem() {
    let result = BookStackConfig::from_lookup(lookup(&[
        ("BOOKSTACK_URL", "docs.example.com"),
        ("BOOKSTACK_TOKEN_ID", "abc"),
        ("BOOKSTACK_VERIFY_SSL", "maybe"),
    ]));

    match result {
        Err(ConfigError::Invalid { errors }) => {
            assert_eq!(errors.len(), 3);
            assert!(errors.iter().any(|e| e.starts_with("bookstack.url")));
            assert!(errors.iter().any(|e| e.starts_with("bookstack.token_secret")));
            assert!(errors.iter().any(|e| e.starts_with("bookstack.verify_ssl")));
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn test_config_from_env_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "BOOKSTACK_URL=https://docs.example.com/").unwrap();
    writeln!(file, "BOOKSTACK_API_KEY=file-key").unwrap();
    writeln!(file, "LOG_LEVEL=debug").unwrap();

    let config = BookStackConfig::from_env_file(file.path()).unwrap();

    assert_eq!(config.base_url().as_ref(), "https://docs.example.com");
    assert_eq!(config.log_level(), "debug");
    assert_eq!(config.credentials().authorization_header(), "Bearer file-key");
}

#[test]
fn test_config_from_missing_env_file() {
    let result = BookStackConfig::from_env_file("/nonexistent/bookstack.env");
    assert!(matches!(result, Err(ConfigError::EnvFile { .. })));
}

// ============================================================================
// Retry and Timing
// ============================================================================

#[tokio::test]
async fn test_retry_policy_recovers_from_transient_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pages/42"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/pages/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let config = BookStackConfig::from_lookup(lookup(&[
        ("BOOKSTACK_URL", uri.as_str()),
        ("BOOKSTACK_API_KEY", "key"),
    ]))
    .unwrap();
    let client = RestClient::new(&config).unwrap();
    let pages = client.pages();

    let policy = RetryPolicy::default().with_delay(Duration::from_millis(1));
    let page = assert_ok!(policy.run(|| pages.read(42)).await);

    assert_eq!(page["id"], 42);
}

#[tokio::test]
async fn test_retry_policy_gives_up_with_last_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pages/42"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(2)
        .mount(&server)
        .await;

    let uri = server.uri();
    let config = BookStackConfig::from_lookup(lookup(&[
        ("BOOKSTACK_URL", uri.as_str()),
        ("BOOKSTACK_API_KEY", "key"),
    ]))
    .unwrap();
    let client = RestClient::new(&config).unwrap();
    let pages = client.pages();

    let policy = RetryPolicy::default()
        .with_max_attempts(2)
        .with_delay(Duration::from_millis(1));
    let error = assert_err!(policy.run(|| pages.read(42)).await);

    assert_eq!(error.status(), Some(500));
}

#[tokio::test]
async fn test_measure_wraps_client_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/shelves"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1}],
            "total": 1
        })))
        .mount(&server)
        .await;

    let uri = server.uri();
    let config = BookStackConfig::from_lookup(lookup(&[
        ("BOOKSTACK_URL", uri.as_str()),
        ("BOOKSTACK_API_KEY", "key"),
    ]))
    .unwrap();
    let client = RestClient::new(&config).unwrap();

    let (result, elapsed) = measure(client.shelves().list_all(None, &Filters::new())).await;

    assert_eq!(result.unwrap().len(), 1);
    assert!(elapsed < Duration::from_secs(30));
}
