//! `GeminiClient` against a mock Generative Language endpoint.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use quill_config::GenAiConfig;
use quill_core::entities::RewriteResult;
use quill_genai::{
    GeminiClient, GenAiError, GenerationError, GenerationRequest, StructuredClient, TextGenerator,
};
use quill_schema::SchemaValidator;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-test:generateContent";

fn config(server: &MockServer) -> GenAiConfig {
    GenAiConfig {
        api_key: "test-key".into(),
        model: "gemini-test".into(),
        endpoint: format!("{}/v1beta", server.uri()),
        timeout_secs: 5,
        temperature: None,
    }
}

fn candidate(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn sends_json_mime_type_and_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "hello"}]}],
            "generationConfig": {"responseMimeType": "application/json"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("{\"ok\":true}")))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(&config(&server)).unwrap();
    let text = client
        .generate_text(GenerationRequest::json("hello"))
        .await
        .unwrap();
    assert_eq!(text, "{\"ok\":true}");
}

async fn generate_error(server: &MockServer) -> GenAiError {
    GeminiClient::new(&config(server))
        .unwrap()
        .generate_text(GenerationRequest::json("hello"))
        .await
        .unwrap_err()
}

#[tokio::test]
async fn api_error_envelope_is_unwrapped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        })))
        .mount(&server)
        .await;

    match generate_error(&server).await {
        GenAiError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(
                message,
                "INVALID_ARGUMENT: API key not valid. Please pass a valid API key."
            );
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn api_error_without_envelope_keeps_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("The service is unavailable."))
        .mount(&server)
        .await;

    match generate_error(&server).await {
        GenAiError::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "The service is unavailable.");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn quota_error_reads_retry_info_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {
                "code": 429,
                "message": "Resource has been exhausted (e.g. check quota).",
                "status": "RESOURCE_EXHAUSTED",
                "details": [{
                    "@type": "type.googleapis.com/google.rpc.RetryInfo",
                    "retryDelay": "12.4s"
                }]
            }
        })))
        .mount(&server)
        .await;

    assert!(matches!(
        generate_error(&server).await,
        GenAiError::RateLimited {
            retry_after_secs: 13
        }
    ));
}

#[tokio::test]
async fn rate_limit_reads_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
        .mount(&server)
        .await;

    assert!(matches!(
        generate_error(&server).await,
        GenAiError::RateLimited {
            retry_after_secs: 7
        }
    ));
}

#[tokio::test]
async fn structured_client_repairs_over_http() {
    let server = MockServer::start().await;

    // First call: prose instead of JSON. Only the repair prompt mentions
    // "Original Response", so match on that for the second answer.
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(wiremock::matchers::body_string_contains("Original Response"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(candidate(r###"{"articleMarkdown":"## Repaired"}"###)),
        )
        .expect(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(candidate("Here is your article!")),
        )
        .expect(1)
        .with_priority(2)
        .mount(&server)
        .await;

    let generator = Arc::new(GeminiClient::new(&config(&server)).unwrap());
    let client = StructuredClient::new(generator);
    let validator = SchemaValidator::<RewriteResult>::new("rewrite_result").unwrap();

    let result = client.generate("rewrite it", &validator).await.unwrap();
    assert_eq!(result.article_markdown, "## Repaired");
}

#[tokio::test]
async fn unreachable_service_is_a_generation_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = GenAiConfig {
        api_key: "test-key".into(),
        model: "gemini-test".into(),
        endpoint: format!("http://{addr}/v1beta"),
        timeout_secs: 5,
        temperature: None,
    };
    let generator = Arc::new(GeminiClient::new(&config).unwrap());
    let client = StructuredClient::new(generator);
    let validator = SchemaValidator::<RewriteResult>::new("rewrite_result").unwrap();

    let err = client.generate("rewrite it", &validator).await.unwrap_err();
    assert!(matches!(err, GenerationError::Service(GenAiError::Http(_))));
}

#[tokio::test]
#[ignore = "requires live GEMINI_API_KEY and network"]
async fn live_structured_generation_when_env_set() {
    let api_key = match std::env::var("GEMINI_API_KEY") {
        Ok(v) if !v.trim().is_empty() => v,
        _ => {
            eprintln!("skipped: GEMINI_API_KEY is not set");
            return;
        }
    };

    let generator = Arc::new(
        GeminiClient::new(&GenAiConfig {
            api_key,
            ..Default::default()
        })
        .expect("client should initialize"),
    );
    let client = StructuredClient::new(generator);
    let validator = SchemaValidator::<RewriteResult>::new("rewrite_result").unwrap();

    let result = client
        .generate(
            r#"Return JSON {"articleMarkdown": "..."} containing a two-line markdown note about tea."#,
            &validator,
        )
        .await
        .expect("live generation should succeed");
    assert!(!result.article_markdown.trim().is_empty());
}
