//! Status Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{GetStatusQuery, ListExamplesQuery};
use crate::infrastructure::http::dto::{ApiResponse, ExamplesResponseDto, StatusResponseDto};
use crate::infrastructure::http::state::AppState;

pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<ApiResponse<StatusResponseDto>> {
    let result = state.get_status_handler.handle(GetStatusQuery);

    Json(ApiResponse::success(StatusResponseDto {
        llm_enabled: result.llm_enabled,
        tts_enabled: result.tts_enabled,
        text_backend: result.text_backend,
        notes: result.notes,
    }))
}

pub async fn list_examples(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<ExamplesResponseDto>> {
    let examples = state.list_examples_handler.handle(ListExamplesQuery);

    Json(ApiResponse::success(ExamplesResponseDto { examples }))
}
