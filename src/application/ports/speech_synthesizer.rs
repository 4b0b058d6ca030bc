//! Speech Synthesizer Port - 远程 TTS 抽象
//!
//! 文本 -> 远程音频 URL，失败以结构化原因返回而不是 Err

use async_trait::async_trait;
use thiserror::Error;

/// 合成失败原因
#[derive(Debug, Clone, Error)]
pub enum SpeechError {
    #[error("not configured")]
    NotConfigured,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: HTTP {status}: {body}")]
    ServiceError { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("no audio URL in response")]
    MissingAudioUrl,
}

/// 单次合成尝试的结果
#[derive(Debug, Clone)]
pub enum SynthesisResult {
    Success {
        audio_url: String,
        raw_response: serde_json::Value,
    },
    Failure(SpeechError),
}

impl SynthesisResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Speech Synthesizer Port
///
/// 每次调用最多发起一次网络请求，不重试
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    /// 是否已配置合成凭证
    fn is_configured(&self) -> bool;

    async fn synthesize(&self, text: &str) -> SynthesisResult;
}
