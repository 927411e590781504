//! HTTP routes for reply generation and service diagnostics.

use std::future::Future;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::error;
use crate::llm::GeminiClient;
use crate::reply::ReplyRequest;
use crate::service::{ReplyService, transport_failure_message};

pub const HEALTH_MESSAGE: &str = "✅ Email Writer Service is running!";
pub const SIMPLE_MESSAGE: &str = "✅ Email writer server is running. Server is working.";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReplyService>,
}

/// Build the router with permissive CORS and request tracing.
pub fn app_routes(service: Arc<ReplyService>) -> Router {
    let state = AppState { service };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/email/generate", post(generate_email))
        .route("/api/email/health", get(health))
        .route("/api/test/gemini", get(test_gemini))
        .route("/api/test/simple", get(simple))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured address and serve until `shutdown` resolves.
pub async fn serve<F>(config: ServerConfig, shutdown: F) -> error::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.socket_addr();
    let backend = GeminiClient::new(config.gemini)?;
    let app = app_routes(Arc::new(ReplyService::new(Arc::new(backend))));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Email writer server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

// ── Generation ──────────────────────────────────────────────────────────

async fn generate_email(
    State(state): State<AppState>,
    Json(request): Json<ReplyRequest>,
) -> impl IntoResponse {
    info!(tone = ?request.tone, "Received request to generate email");

    match state.service.generate_reply(&request).await {
        Ok(result) => (StatusCode::OK, result.into_text()),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            transport_failure_message(request.tone.as_deref(), &e),
        ),
    }
}

// ── Diagnostics ─────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    HEALTH_MESSAGE
}

async fn simple() -> impl IntoResponse {
    SIMPLE_MESSAGE
}

async fn test_gemini(State(state): State<AppState>) -> impl IntoResponse {
    info!("Testing Gemini API");
    match state.service.diagnose().await {
        Ok(result) => (
            StatusCode::OK,
            format!("✅ TEST SUCCESSFUL!\n\nResponse: {}", result.into_text()),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("❌ TEST FAILED: {e}"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use tower::ServiceExt;

    use super::*;
    use crate::error::LlmError;
    use crate::llm::GenerationBackend;
    use crate::reply::GeneratedPrompt;

    struct FixedBackend(Option<&'static str>);

    #[async_trait]
    impl GenerationBackend for FixedBackend {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn generate(&self, _prompt: &GeneratedPrompt) -> Result<String, LlmError> {
            self.0.map(str::to_string).ok_or_else(|| LlmError::Timeout {
                provider: "fixed".into(),
                timeout: std::time::Duration::from_secs(30),
            })
        }
    }

    fn app(payload: Option<&'static str>) -> Router {
        app_routes(Arc::new(ReplyService::new(Arc::new(FixedBackend(payload)))))
    }

    async fn body_text(resp: axum::response::Response) -> String {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn generate_request(json: &str) -> Request<Body> {
        Request::post("/api/email/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn generate_returns_reply_text() {
        let resp = app(Some(r#"{"candidates":[{"content":{"parts":[{"text":"On my way!\n"}]}}]}"#))
            .oneshot(generate_request(r#"{"emailContent":"Lunch?","tone":"casual"}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_text(resp).await, "On my way!");
    }

    #[tokio::test]
    async fn malformed_upstream_payload_is_still_200() {
        let resp = app(Some("<html>oops</html>"))
            .oneshot(generate_request(r#"{"emailContent":"Lunch?"}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.starts_with("Error parsing response: "));
    }

    #[tokio::test]
    async fn transport_failure_is_500_with_apology() {
        let resp = app(None)
            .oneshot(generate_request(r#"{"emailContent":"Lunch?","tone":"Empathetic"}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_text(resp).await,
            "Sorry, I encountered an error while generating your Empathetic reply: \
             Provider fixed timed out after 30s"
        );
    }

    #[tokio::test]
    async fn missing_email_content_is_rejected() {
        let resp = app(Some("{}"))
            .oneshot(generate_request(r#"{"tone":"casual"}"#))
            .await
            .unwrap();
        assert!(resp.status().is_client_error());
    }

    #[tokio::test]
    async fn health_and_simple_respond() {
        let resp = app(None)
            .oneshot(Request::get("/api/email/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_text(resp).await, HEALTH_MESSAGE);

        let resp = app(None)
            .oneshot(Request::get("/api/test/simple").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_text(resp).await, SIMPLE_MESSAGE);
    }

    #[tokio::test]
    async fn gemini_diagnostic_reports_failure() {
        let resp = app(None)
            .oneshot(Request::get("/api/test/gemini").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(resp).await.starts_with("❌ TEST FAILED: "));
    }

    #[tokio::test]
    async fn gemini_diagnostic_reports_success() {
        let resp = app(Some(r#"{"candidates":[{"content":{"parts":[{"text":"Tomorrow works."}]}}]}"#))
            .oneshot(Request::get("/api/test/gemini").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_text(resp).await,
            "✅ TEST SUCCESSFUL!\n\nResponse: Tomorrow works."
        );
    }

    #[tokio::test]
    async fn cors_preflight_allows_any_origin() {
        let resp = app(None)
            .oneshot(
                Request::options("/api/email/generate")
                    .header(header::ORIGIN, "chrome-extension://abc")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
