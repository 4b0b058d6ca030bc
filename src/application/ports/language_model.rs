//! Language Model Port - LLM 文本生成抽象
//!
//! 具体实现在 infrastructure/adapters/llm

use async_trait::async_trait;
use thiserror::Error;

/// LLM 错误
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Empty completion")]
    EmptyCompletion,
}

/// Language Model Port
///
/// 接收渲染好的 Prompt（人设 + 历史 + 当前输入），返回模型回复文本
#[async_trait]
pub trait LanguageModelPort: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// 模型名称（用于日志）
    fn model_name(&self) -> &str;
}
