//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::application::{
    // Command handlers
    ChatHandler, ClearChatHandler,
    // Query handlers
    GetAudioHandler, GetStatusHandler, ListExamplesHandler,
    // Ports / services
    AudioStoragePort, ResponseOrchestrator,
};
use crate::domain::ConversationSession;

/// 应用状态
///
/// 单用户进程：整个服务共享一个对话会话
pub struct AppState {
    // ========== Ports / Services ==========
    pub orchestrator: Arc<ResponseOrchestrator>,
    pub audio_storage: Arc<dyn AudioStoragePort>,

    // ========== Command Handlers ==========
    pub chat_handler: ChatHandler,
    pub clear_chat_handler: ClearChatHandler,

    // ========== Query Handlers ==========
    pub get_status_handler: GetStatusHandler,
    pub list_examples_handler: ListExamplesHandler,
    pub get_audio_handler: GetAudioHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        orchestrator: Arc<ResponseOrchestrator>,
        session: Arc<Mutex<ConversationSession>>,
        audio_storage: Arc<dyn AudioStoragePort>,
    ) -> Self {
        Self {
            orchestrator: orchestrator.clone(),
            audio_storage: audio_storage.clone(),

            chat_handler: ChatHandler::new(orchestrator.clone(), session, audio_storage.clone()),
            clear_chat_handler: ClearChatHandler::new(),

            get_status_handler: GetStatusHandler::new(orchestrator),
            list_examples_handler: ListExamplesHandler::new(),
            get_audio_handler: GetAudioHandler::new(audio_storage),
        }
    }
}
