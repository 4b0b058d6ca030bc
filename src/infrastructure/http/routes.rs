//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping              GET   健康检查
//! - /api/status            GET   能力状态（LLM / TTS 是否启用）
//! - /api/examples          GET   示例问题
//! - /api/chat              POST  发送消息，返回回复和音频地址
//! - /api/chat/clear        POST  清空界面历史（不重置 LLM 会话）
//! - /api/audio/:filename   GET   获取已保存的音频

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/status", get(handlers::get_status))
        .route("/examples", get(handlers::list_examples))
        .route("/chat", post(handlers::chat))
        .route("/chat/clear", post(handlers::clear_chat))
        .route("/audio/:filename", get(handlers::get_audio))
}
