//! Chat Command Handlers

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::application::commands::chat_commands::*;
use crate::application::ports::AudioStoragePort;
use crate::application::services::ResponseOrchestrator;
use crate::domain::ConversationSession;

/// Chat Handler - 处理一轮对话
///
/// 会话锁覆盖整轮处理，多个请求按顺序执行，避免历史交错写入
pub struct ChatHandler {
    orchestrator: Arc<ResponseOrchestrator>,
    session: Arc<Mutex<ConversationSession>>,
    storage: Arc<dyn AudioStoragePort>,
}

impl ChatHandler {
    pub fn new(
        orchestrator: Arc<ResponseOrchestrator>,
        session: Arc<Mutex<ConversationSession>>,
        storage: Arc<dyn AudioStoragePort>,
    ) -> Self {
        Self {
            orchestrator,
            session,
            storage,
        }
    }

    pub async fn handle(&self, cmd: ChatCommand) -> ChatResponse {
        let result = {
            let mut session = self.session.lock().await;
            self.orchestrator
                .process_turn(&mut session, &cmd.message)
                .await
        };

        let mut history = cmd.history;
        history.push((cmd.message, result.reply_text.clone()));

        // 只返回确实存在的音频文件
        let audio_file = match result
            .audio_file
            .as_deref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
        {
            Some(name) if self.storage.audio_exists(name).await => Some(name.to_string()),
            _ => None,
        };

        tracing::info!(
            history_len = history.len(),
            has_audio = audio_file.is_some(),
            "Chat turn handled"
        );

        ChatResponse {
            history,
            reply: result.reply_text,
            audio_file,
        }
    }
}

/// ClearChat Handler - 清空界面历史和音频引用
pub struct ClearChatHandler;

impl ClearChatHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, _cmd: ClearChatCommand) -> ClearChatResponse {
        tracing::debug!("Chat display cleared");
        ClearChatResponse {
            history: Vec::new(),
            audio_file: None,
        }
    }
}

impl Default for ClearChatHandler {
    fn default() -> Self {
        Self::new()
    }
}
