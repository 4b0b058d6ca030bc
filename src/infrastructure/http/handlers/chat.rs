//! Chat Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{ChatCommand, ClearChatCommand};
use crate::infrastructure::http::dto::{
    audio_url, ApiResponse, ChatRequest, ChatResponseDto, ClearChatResponseDto,
};
use crate::infrastructure::http::state::AppState;

pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Json<ApiResponse<ChatResponseDto>> {
    let cmd = ChatCommand {
        message: req.message,
        history: req.history,
    };

    let result = state.chat_handler.handle(cmd).await;

    Json(ApiResponse::success(ChatResponseDto {
        history: result.history,
        reply: result.reply,
        audio_url: result.audio_file.as_deref().map(audio_url),
    }))
}

pub async fn clear_chat(State(state): State<Arc<AppState>>) -> Json<ApiResponse<ClearChatResponseDto>> {
    let result = state.clear_chat_handler.handle(ClearChatCommand);

    Json(ApiResponse::success(ClearChatResponseDto {
        history: result.history,
        audio_url: result.audio_file.as_deref().map(audio_url),
    }))
}
