//! Data Transfer Objects

use serde::{Deserialize, Serialize};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Chat DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// 界面当前历史，每项为 [用户输入, 回复]
    #[serde(default)]
    pub history: Vec<(String, String)>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponseDto {
    pub history: Vec<(String, String)>,
    pub reply: String,
    pub audio_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClearChatResponseDto {
    pub history: Vec<(String, String)>,
    pub audio_url: Option<String>,
}

// ============================================================================
// Status DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct StatusResponseDto {
    pub llm_enabled: bool,
    pub tts_enabled: bool,
    pub text_backend: String,
    pub notes: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ExamplesResponseDto {
    pub examples: Vec<String>,
}

/// 音频文件名 -> 访问 URL
pub fn audio_url(filename: &str) -> String {
    format!("/api/audio/{}", filename)
}
