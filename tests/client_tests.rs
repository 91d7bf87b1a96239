use article_tldr::ai::{GeminiClient, NO_SUMMARY_FALLBACK, SummaryGenerator};
use article_tldr::core::config::AppConfig;
use article_tldr::errors::SummaryError;
use mockito::Matcher;
use serde_json::json;
use url::Url;

/// Tests for the single generateContent round-trip, against a local mock server.

const ENDPOINT_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

fn client_for(server: &mockito::ServerGuard) -> GeminiClient {
    let config = AppConfig {
        api_base: Url::parse(&server.url()).unwrap(),
        ..AppConfig::default()
    };
    GeminiClient::new(&config)
}

#[tokio::test]
async fn test_successful_summary() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "contents": [{ "parts": [{ "text": "Summarize this" }] }],
            "generationConfig": { "temperature": 0.2 }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "candidates": [{ "content": { "parts": [{ "text": "- A\n- B" }] } }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let summary = client_for(&server)
        .request_summary("Summarize this", "test-key")
        .await
        .unwrap();

    assert_eq!(summary, "- A\n- B");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_quota_error_surfaces_remote_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", ENDPOINT_PATH)
        .match_query(Matcher::Any)
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":{"message":"quota exceeded"}}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .request_summary("prompt", "key")
        .await
        .unwrap_err();

    match &err {
        SummaryError::RemoteRequest { status, message } => {
            assert_eq!(*status, 429);
            assert_eq!(message.as_deref(), Some("quota exceeded"));
        }
        other => panic!("Unexpected error type: {other:?}"),
    }
    assert_eq!(err.user_message(), "Error: quota exceeded");
}

#[tokio::test]
async fn test_error_without_json_body_uses_generic_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", ENDPOINT_PATH)
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let err = client_for(&server)
        .request_summary("prompt", "key")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SummaryError::RemoteRequest {
            status: 502,
            message: None
        }
    ));
    assert_eq!(err.user_message(), "Error: API request failed");
}

#[tokio::test]
async fn test_missing_candidates_is_soft_fallback() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", ENDPOINT_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#)
        .create_async()
        .await;

    let summary = client_for(&server)
        .request_summary("prompt", "key")
        .await
        .unwrap();

    assert_eq!(summary, NO_SUMMARY_FALLBACK);
    assert_eq!(summary, "No summary available.");
}

#[tokio::test]
async fn test_malformed_success_body_is_transport_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", ENDPOINT_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = client_for(&server)
        .request_summary("prompt", "key")
        .await
        .unwrap_err();

    assert!(
        matches!(err, SummaryError::Transport { .. }),
        "Expected transport failure, got {err:?}"
    );
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_failure() {
    // Bind and drop a listener so the port is known to be closed
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let config = AppConfig {
        api_base: Url::parse(&format!("http://127.0.0.1:{port}")).unwrap(),
        ..AppConfig::default()
    };

    let err = GeminiClient::new(&config)
        .request_summary("prompt", "secret-key")
        .await
        .unwrap_err();

    assert!(matches!(err, SummaryError::Transport { .. }));
    assert_eq!(
        err.user_message(),
        "Error: Failed to generate summary. Please try again later."
    );
    assert!(
        !err.detail().unwrap_or_default().contains("secret-key"),
        "Transport detail must not leak the API key"
    );
}
