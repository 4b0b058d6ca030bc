//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_fetcher;
mod audio_storage;
mod language_model;
mod speech_synthesizer;

pub use audio_fetcher::{audio_filename_for_url, AudioFetcherPort, DownloadError, DownloadResult};
pub use audio_storage::{validate_filename, AudioStorageError, AudioStoragePort};
pub use language_model::{LanguageModelPort, LlmError};
pub use speech_synthesizer::{SpeechError, SpeechSynthesizerPort, SynthesisResult};
