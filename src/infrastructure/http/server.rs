//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::Router;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::error_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 7860,
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state.clone());
        let addr = self.config.addr();

        info!("Starting HTTP server on {} (with graceful shutdown)", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}

/// 构建 Router
fn build_router(state: Arc<AppState>) -> Router {
    // CORS 配置 - 允许所有来源的跨域请求
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .expose_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    // 聊天请求携带完整界面历史，限制为 1MB
    create_routes()
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(middleware::from_fn(error_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{FakeFetcher, FakeSynthesizer, MemoryAudioStorage};
    use crate::application::{
        audio_filename_for_url, AudioStoragePort, ResponseOrchestrator, TextBackend, TextGenerator,
    };
    use crate::domain::{ConversationSession, EXAMPLE_QUESTIONS};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tokio::sync::Mutex;
    use tower::util::ServiceExt;

    const AUDIO_URL: &str = "https://cdn.example.com/speech/route.mp3";

    fn router_with(synthesizer: FakeSynthesizer, storage: Arc<MemoryAudioStorage>) -> Router {
        let storage: Arc<dyn AudioStoragePort> = storage;
        let orchestrator = Arc::new(ResponseOrchestrator::new(
            TextGenerator::new(TextBackend::None),
            Arc::new(synthesizer),
            Arc::new(FakeFetcher::ok(b"ID3mp3".to_vec())),
            storage.clone(),
        ));
        let session = Arc::new(Mutex::new(ConversationSession::new()));
        build_router(Arc::new(AppState::new(orchestrator, session, storage)))
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn send_json(router: Router, request: Request<Body>) -> Value {
        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_slice(&body).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let router = router_with(FakeSynthesizer::unconfigured(), Arc::new(MemoryAudioStorage::new()));

        let body = send_json(router, get("/api/ping")).await;

        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_status_reports_disabled_capabilities() {
        let router = router_with(FakeSynthesizer::unconfigured(), Arc::new(MemoryAudioStorage::new()));

        let body = send_json(router, get("/api/status")).await;

        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["llm_enabled"], false);
        assert_eq!(body["data"]["tts_enabled"], false);
        assert_eq!(body["data"]["text_backend"], "fallback");
        assert_eq!(body["data"]["notes"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_examples() {
        let router = router_with(FakeSynthesizer::unconfigured(), Arc::new(MemoryAudioStorage::new()));

        let body = send_json(router, get("/api/examples")).await;

        let examples = body["data"]["examples"].as_array().unwrap();
        assert_eq!(examples.len(), EXAMPLE_QUESTIONS.len());
        assert_eq!(examples[0], EXAMPLE_QUESTIONS[0]);
    }

    #[tokio::test]
    async fn test_chat_without_speech() {
        let router = router_with(FakeSynthesizer::unconfigured(), Arc::new(MemoryAudioStorage::new()));

        let body = send_json(
            router,
            post_json(
                "/api/chat",
                json!({ "message": "Any adventure sport?", "history": [["hi", "hello"]] }),
            ),
        )
        .await;

        let data = &body["data"];
        assert!(data["reply"].as_str().unwrap().contains("paragliding"));
        assert!(data["audio_url"].is_null());
        assert_eq!(data["history"].as_array().unwrap().len(), 2);
        assert_eq!(data["history"][1][0], "Any adventure sport?");
    }

    #[tokio::test]
    async fn test_chat_with_speech_then_fetch_audio() {
        let storage = Arc::new(MemoryAudioStorage::new());
        let router = router_with(FakeSynthesizer::success(AUDIO_URL), storage.clone());

        let body = send_json(
            router.clone(),
            post_json("/api/chat", json!({ "message": "a hidden gem?" })),
        )
        .await;

        let expected = format!("/api/audio/{}", audio_filename_for_url(AUDIO_URL));
        assert_eq!(body["data"]["audio_url"], expected.as_str());
        assert_eq!(storage.len(), 1);

        let response = router.oneshot(get(&expected)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "audio/mpeg");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ID3mp3");
    }

    #[tokio::test]
    async fn test_clear_chat() {
        let router = router_with(FakeSynthesizer::unconfigured(), Arc::new(MemoryAudioStorage::new()));

        let body = send_json(router, post_json("/api/chat/clear", json!({}))).await;

        assert_eq!(body["data"]["history"], json!([]));
        assert!(body["data"]["audio_url"].is_null());
    }

    #[tokio::test]
    async fn test_missing_audio_is_not_found() {
        let router = router_with(FakeSynthesizer::unconfigured(), Arc::new(MemoryAudioStorage::new()));

        let body = send_json(router, get("/api/audio/audio_00000000.mp3")).await;

        assert_eq!(body["errno"], 404);
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_audio_traversal_rejected() {
        let router = router_with(FakeSynthesizer::unconfigured(), Arc::new(MemoryAudioStorage::new()));

        let body = send_json(router, get("/api/audio/..%2Fconfig.toml")).await;

        assert_eq!(body["errno"], 400);
    }
}
