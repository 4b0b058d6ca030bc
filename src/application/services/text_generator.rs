//! Text Generator - LLM 对话 + 关键词回退
//!
//! 后端在启动时选定一次；LLM 调用失败只影响当前轮次

use std::sync::Arc;

use crate::application::ports::LanguageModelPort;
use crate::domain::{fallback_reply, render_prompt, ConversationSession};

/// 文本生成后端
#[derive(Clone)]
pub enum TextBackend {
    /// 未配置 LLM，始终使用回退回复
    None,
    /// 有状态的 LLM 对话
    LanguageModel(Arc<dyn LanguageModelPort>),
}

impl TextBackend {
    pub fn is_language_model(&self) -> bool {
        matches!(self, Self::LanguageModel(_))
    }

    pub fn describe(&self) -> &str {
        match self {
            Self::None => "fallback",
            Self::LanguageModel(model) => model.model_name(),
        }
    }
}

impl std::fmt::Debug for TextBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("TextBackend::None"),
            Self::LanguageModel(model) => {
                write!(f, "TextBackend::LanguageModel({})", model.model_name())
            }
        }
    }
}

/// 文本生成器
pub struct TextGenerator {
    backend: TextBackend,
}

impl TextGenerator {
    pub fn new(backend: TextBackend) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &TextBackend {
        &self.backend
    }

    /// 生成回复文本，永不失败
    ///
    /// 只有 LLM 成功时才把本轮对话写入会话历史
    pub async fn generate(&self, session: &mut ConversationSession, utterance: &str) -> String {
        let model = match &self.backend {
            TextBackend::None => return fallback_reply(utterance).to_string(),
            TextBackend::LanguageModel(model) => model,
        };

        let prompt = render_prompt(session.history(), utterance);

        match model.complete(&prompt).await {
            Ok(reply) if !reply.trim().is_empty() => {
                session.record(utterance, reply.clone());
                tracing::debug!(
                    model = %model.model_name(),
                    history_len = session.len(),
                    reply_len = reply.len(),
                    "LLM reply generated"
                );
                reply
            }
            Ok(_) => {
                tracing::warn!(model = %model.model_name(), "LLM returned blank reply, using fallback");
                fallback_reply(utterance).to_string()
            }
            Err(e) => {
                tracing::warn!(model = %model.model_name(), error = %e, "LLM chain error, using fallback");
                fallback_reply(utterance).to_string()
            }
        }
    }
}
