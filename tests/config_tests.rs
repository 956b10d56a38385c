use std::collections::HashMap;

use summarizer::core::config::{self, AppConfig};
use summarizer::errors::SummarizerError;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_defaults_when_nothing_is_set() {
    let config = AppConfig::from_lookup(lookup(&[])).unwrap();

    assert_eq!(config.bind_addr.to_string(), config::DEFAULT_BIND_ADDR);
    assert_eq!(
        config.gateway_bind_addr.to_string(),
        config::DEFAULT_GATEWAY_BIND_ADDR
    );
    assert_eq!(config.model_id, config::DEFAULT_MODEL_ID);
    assert_eq!(config.model_revision, config::DEFAULT_MODEL_REVISION);
    assert_eq!(config.backend_url, config::DEFAULT_BACKEND_URL);
}

#[test]
fn test_overrides_are_applied() {
    let config = AppConfig::from_lookup(lookup(&[
        ("SUMMARIZER_BIND_ADDR", "127.0.0.1:9100"),
        ("SUMMARIZER_MODEL_ID", "google-t5/t5-base"),
        ("SUMMARIZER_MODEL_REVISION", "refs/pr/1"),
        ("GATEWAY_BIND_ADDR", "127.0.0.1:9200"),
        ("SUMMARIZER_BACKEND_URL", "http://summarizer:8000/"),
    ]))
    .unwrap();

    assert_eq!(config.bind_addr.port(), 9100);
    assert_eq!(config.model_id, "google-t5/t5-base");
    assert_eq!(config.model_revision, "refs/pr/1");
    assert_eq!(config.gateway_bind_addr.port(), 9200);
    assert_eq!(config.backend_url, "http://summarizer:8000");
}

#[test]
fn test_invalid_bind_addr_is_config_error() {
    let err =
        AppConfig::from_lookup(lookup(&[("SUMMARIZER_BIND_ADDR", "not-an-addr")])).unwrap_err();

    match err {
        SummarizerError::Config(msg) => assert!(msg.starts_with("SUMMARIZER_BIND_ADDR")),
        other => panic!("Unexpected error type: {other:?}"),
    }
}
