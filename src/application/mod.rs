//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（LanguageModel、SpeechSynthesizer、AudioFetcher、AudioStorage）
//! - services: 回复管线（TextGenerator、ResponseOrchestrator）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use commands::{
    handlers::{ChatHandler, ClearChatHandler},
    ChatCommand, ChatResponse, ClearChatCommand, ClearChatResponse, DisplayExchange,
};

pub use error::ApplicationError;

pub use ports::{
    // Audio fetcher
    audio_filename_for_url,
    AudioFetcherPort,
    DownloadError,
    DownloadResult,
    // Audio storage
    AudioStorageError,
    AudioStoragePort,
    // Language model
    LanguageModelPort,
    LlmError,
    // Speech synthesizer
    SpeechError,
    SpeechSynthesizerPort,
    SynthesisResult,
};

pub use queries::{
    handlers::{GetAudioHandler, GetStatusHandler, ListExamplesHandler},
    GetAudioQuery, GetAudioResponse, GetStatusQuery, GetStatusResponse, ListExamplesQuery,
};

pub use services::{AudioOutcome, ResponseOrchestrator, TextBackend, TextGenerator};
