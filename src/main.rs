//! Roam - 旅行语音聊天机器人
//!
//! 启动时根据凭证选择能力：
//! - OPENAI_API_KEY 缺失时使用关键词回退回复
//! - MURFAI_API_KEY 缺失时只返回文本

use std::sync::Arc;

use roam::application::{ResponseOrchestrator, TextBackend, TextGenerator};
use roam::config::{load_config, print_config, AppConfig};
use roam::domain::ConversationSession;
use roam::infrastructure::adapters::{
    FileAudioStorage, HttpAudioFetcher, HttpAudioFetcherConfig, HttpSpeechClient,
    HttpSpeechClientConfig, OpenAiChatClient, OpenAiChatClientConfig,
};
use roam::infrastructure::http::{AppState, HttpServer, ServerConfig};
use tokio::sync::Mutex;

/// 根据 LLM 配置选择文本后端（只在启动时决定一次）
fn select_text_backend(config: &AppConfig) -> TextBackend {
    let Some(api_key) = config.llm.api_key.clone() else {
        tracing::warn!("OPENAI_API_KEY not set, using fallback responses");
        return TextBackend::None;
    };

    let client_config = OpenAiChatClientConfig {
        api_key,
        base_url: config.llm.base_url.clone(),
        model: config.llm.model.clone(),
        temperature: config.llm.temperature,
    };

    match OpenAiChatClient::new(client_config) {
        Ok(client) => TextBackend::LanguageModel(Arc::new(client)),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to initialize language model, using fallback responses");
            TextBackend::None
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：凭证环境变量 > ROAM_ 环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},roam={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Roam - travel voice chatbot");
    print_config(&config);

    // 文本后端
    let text_generator = TextGenerator::new(select_text_backend(&config));

    // 语音合成
    let speech_config = HttpSpeechClientConfig {
        url: config.tts.url.clone(),
        api_key: config.tts.api_key.clone(),
        user_id: config.tts.user_id.clone(),
        voice_id: config.tts.voice_id.clone(),
        format: config.tts.format.clone(),
        timeout_secs: config.tts.timeout_secs,
    };
    let synthesizer = Arc::new(HttpSpeechClient::new(speech_config)?);
    if !config.tts.is_enabled() {
        tracing::warn!("MURFAI_API_KEY not set, audio responses disabled");
    }

    // 音频下载与本地存储
    let fetcher = Arc::new(HttpAudioFetcher::new(HttpAudioFetcherConfig {
        timeout_secs: config.download.timeout_secs,
    })?);
    let storage = Arc::new(FileAudioStorage::new(config.storage.audio_dir.clone()).await?);

    let orchestrator = Arc::new(ResponseOrchestrator::new(
        text_generator,
        synthesizer,
        fetcher,
        storage.clone(),
    ));

    tracing::info!(
        text_backend = orchestrator.text_generator().backend().describe(),
        speech_enabled = orchestrator.speech_enabled(),
        "Capabilities selected"
    );

    // 单用户进程，共享一个会话
    let session = Arc::new(Mutex::new(ConversationSession::new()));

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(orchestrator, session, storage);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
