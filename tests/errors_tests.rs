use std::error::Error;
use summarizer::errors::SummarizerError;

#[test]
fn test_summarizer_error_implements_error_trait() {
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    let error = SummarizerError::Inference("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_inference_error_is_verbatim() {
    let error = SummarizerError::Inference("CUDA out of memory".to_string());
    assert_eq!(format!("{error}"), "CUDA out of memory");
}

#[test]
fn test_summarizer_error_display() {
    let error = SummarizerError::ModelLoad("config.json: not found".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to load summarization model: config.json: not found"
    );

    let error = SummarizerError::Config("SUMMARIZER_BIND_ADDR: invalid".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid configuration: SUMMARIZER_BIND_ADDR: invalid"
    );

    let error = SummarizerError::Http("Connection error".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection error"
    );
}

#[test]
fn test_summarizer_error_from_conversions() {
    let err = anyhow::anyhow!("tensor shape mismatch");
    let converted: SummarizerError = err.into();

    match converted {
        SummarizerError::Inference(msg) => assert_eq!(msg, "tensor shape mismatch"),
        other => panic!("Unexpected error type: {other:?}"),
    }

    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> SummarizerError {
        SummarizerError::from(err)
    }
}

#[tokio::test]
async fn test_join_error_becomes_inference_error() {
    fn boom() {
        panic!("boom");
    }

    let join_err = tokio::task::spawn_blocking(boom).await.unwrap_err();
    let converted = SummarizerError::from(join_err);

    assert!(matches!(
        converted,
        SummarizerError::Inference(ref m) if m.starts_with("inference task failed")
    ));
}
