//! HTTP surface: three operation routes, health, and schema export.

mod error;
mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use quill_config::ServerConfig;
use quill_editor::Editor;
use quill_schema::SchemaRegistry;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared per-process state. Operations keep nothing between requests.
#[derive(Clone)]
pub struct AppState {
    pub editor: Arc<Editor>,
    pub registry: Arc<SchemaRegistry>,
}

/// Build the router with body limit, tracing, and optional CORS.
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/draft", post(handlers::draft))
        .route("/api/rewrite", post(handlers::rewrite))
        .route("/api/schemas/{name}", get(handlers::schema))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if config.cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn run(state: AppState, config: &ServerConfig, addr: SocketAddr) -> anyhow::Result<()> {
    let app = router(state, config);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "quill listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated with error")
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use quill_config::ServerConfig;
    use quill_editor::{DraftSettings, Editor};
    use quill_genai::{GenAiError, ScriptedGenerator};
    use quill_schema::SchemaRegistry;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::{AppState, router};

    fn app(generator: &Arc<ScriptedGenerator>, config: &ServerConfig) -> axum::Router {
        let editor = Editor::new(generator.clone(), DraftSettings::default()).expect("editor");
        let state = AppState {
            editor: Arc::new(editor),
            registry: Arc::new(SchemaRegistry::new()),
        };
        router(state, config)
    }

    fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.into())
            .expect("request")
    }

    async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn analysis() -> Value {
        let option = |id: &str| {
            json!({
                "id": id, "title": "T", "thesis": "Th", "outline": ["A"],
                "bestFor": "B", "researchToDo": [], "sourcesToCheck": [], "keywords": []
            })
        };
        json!({
            "topicTitle": "Photosynthesis",
            "chainDigest": ["Plants use light"],
            "coreQuestion": "How do plants eat?",
            "claimMap": [{"claim": "Leaves are green", "evidenceLevel": "from_chain"}],
            "options": [option("explainer"), option("meta"), option("research_brief")]
        })
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let generator = Arc::new(ScriptedGenerator::with_texts(Vec::<String>::new()));
        let request = Request::get("/health").body(Body::empty()).expect("request");

        let (status, body) = send(app(&generator, &ServerConfig::default()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn analyze_returns_generated_analysis() {
        let generator = Arc::new(ScriptedGenerator::with_texts([analysis().to_string()]));
        let request = post_json(
            "/api/analyze",
            json!({"chainText": "User: what is photosynthesis?", "audience": "kids"}).to_string(),
        );

        let (status, body) = send(app(&generator, &ServerConfig::default()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["options"].as_array().map(Vec::len), Some(3));
        assert!(generator.prompts()[0].contains("- Audience: kids"));
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let generator = Arc::new(ScriptedGenerator::with_texts(Vec::<String>::new()));
        let request = post_json("/api/analyze", "{not json");

        let (status, body) = send(app(&generator, &ServerConfig::default()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request");
        assert!(body["details"].as_str().is_some_and(|d| !d.is_empty()));
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn missing_field_is_bad_request() {
        let generator = Arc::new(ScriptedGenerator::with_texts(Vec::<String>::new()));
        let request = post_json("/api/draft", json!({"chainText": "chain"}).to_string());

        let (status, body) = send(app(&generator, &ServerConfig::default()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["details"].as_str().is_some_and(|d| d.contains("optionId")));
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn oversized_chain_is_bad_request() {
        let generator = Arc::new(ScriptedGenerator::with_texts(Vec::<String>::new()));
        let request = post_json(
            "/api/analyze",
            json!({"chainText": "x".repeat(200_001)}).to_string(),
        );

        let (status, _) = send(app(&generator, &ServerConfig::default()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn blank_instruction_is_bad_request() {
        let generator = Arc::new(ScriptedGenerator::with_texts(Vec::<String>::new()));
        let request = post_json(
            "/api/rewrite",
            json!({"articleMarkdown": "## A", "instruction": "   "}).to_string(),
        );

        let (status, body) = send(app(&generator, &ServerConfig::default()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["details"].as_str().is_some_and(|d| d.contains("instruction")));
    }

    #[tokio::test]
    async fn generation_failure_is_server_error() {
        let generator = Arc::new(ScriptedGenerator::new([Err(GenAiError::Api {
            status: 500,
            message: "backend down".into(),
        })]));
        let request = post_json(
            "/api/draft",
            json!({"chainText": "chain", "optionId": "explainer"}).to_string(),
        );

        let (status, body) = send(app(&generator, &ServerConfig::default()), request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to draft article");
        assert!(body["details"].as_str().is_some_and(|d| d.contains("backend down")));
    }

    #[tokio::test]
    async fn rewrite_returns_replacement_body() {
        let generator = Arc::new(ScriptedGenerator::with_texts([
            json!({"articleMarkdown": "## Short"}).to_string(),
        ]));
        let request = post_json(
            "/api/rewrite",
            json!({"articleMarkdown": "## Long\nbody", "instruction": "shorten"}).to_string(),
        );

        let (status, body) = send(app(&generator, &ServerConfig::default()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"articleMarkdown": "## Short"}));
    }

    #[tokio::test]
    async fn schema_route_serves_registered_schemas() {
        let generator = Arc::new(ScriptedGenerator::with_texts(Vec::<String>::new()));
        let config = ServerConfig::default();

        let found = Request::get("/api/schemas/draft_result")
            .body(Body::empty())
            .expect("request");
        let (status, body) = send(app(&generator, &config), found).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["properties"]["sourcePlaceholders"].is_object());

        let missing = Request::get("/api/schemas/nope")
            .body(Body::empty())
            .expect("request");
        let (status, body) = send(app(&generator, &config), missing).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Schema not found");
    }

    #[tokio::test]
    async fn body_over_limit_is_rejected() {
        let generator = Arc::new(ScriptedGenerator::with_texts(Vec::<String>::new()));
        let config = ServerConfig {
            max_body_bytes: 64,
            ..ServerConfig::default()
        };
        let request = post_json(
            "/api/analyze",
            json!({"chainText": "x".repeat(1024)}).to_string(),
        );

        let (status, _) = send(app(&generator, &config), request).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(generator.calls(), 0);
    }
}
