#![cfg(feature = "api")]

use std::path::{Path, PathBuf};

use summarizer::ai::T5Summarizer;
use summarizer::errors::SummarizerError;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("summarizer-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_missing_config_is_model_load_error() {
    let missing = Path::new("/nonexistent/summarizer/config.json");
    let result = T5Summarizer::from_files(missing, missing, missing);

    match result {
        Err(SummarizerError::ModelLoad(msg)) => assert!(msg.contains("config.json")),
        Err(other) => panic!("Unexpected error type: {other:?}"),
        Ok(_) => panic!("loading from a missing path should fail"),
    }
}

#[test]
fn test_malformed_config_is_model_load_error() {
    let config = scratch_file("config.json", "{ not json");
    let missing = Path::new("/nonexistent/summarizer/tokenizer.json");
    let result = T5Summarizer::from_files(&config, missing, missing);
    let _ = std::fs::remove_file(&config);

    assert!(matches!(result, Err(SummarizerError::ModelLoad(_))));
}
