//! Response Orchestrator - 单轮对话管线
//!
//! 文本生成 -> 语音合成 -> 音频下载 -> 本地写盘
//!
//! 任何一步失败都降级为仅文本，不会中断本轮对话

use std::path::PathBuf;
use std::sync::Arc;

use super::text_generator::TextGenerator;
use crate::application::ports::{
    AudioFetcherPort, AudioStorageError, AudioStoragePort, DownloadError, DownloadResult,
    SpeechError, SpeechSynthesizerPort, SynthesisResult,
};
use crate::domain::{ConversationSession, TurnResult};

/// 音频生成的内部结果（仅用于日志区分降级原因）
#[derive(Debug)]
pub enum AudioOutcome {
    Stored(PathBuf),
    NotConfigured,
    SynthesisFailed(SpeechError),
    DownloadFailed(DownloadError),
    PersistFailed(AudioStorageError),
}

/// 回复编排器
pub struct ResponseOrchestrator {
    text_generator: TextGenerator,
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
    fetcher: Arc<dyn AudioFetcherPort>,
    storage: Arc<dyn AudioStoragePort>,
}

impl ResponseOrchestrator {
    pub fn new(
        text_generator: TextGenerator,
        synthesizer: Arc<dyn SpeechSynthesizerPort>,
        fetcher: Arc<dyn AudioFetcherPort>,
        storage: Arc<dyn AudioStoragePort>,
    ) -> Self {
        Self {
            text_generator,
            synthesizer,
            fetcher,
            storage,
        }
    }

    pub fn text_generator(&self) -> &TextGenerator {
        &self.text_generator
    }

    /// 是否启用语音合成
    pub fn speech_enabled(&self) -> bool {
        self.synthesizer.is_configured()
    }

    /// 处理一轮对话
    pub async fn process_turn(
        &self,
        session: &mut ConversationSession,
        utterance: &str,
    ) -> TurnResult {
        let reply = self.text_generator.generate(session, utterance).await;

        match self.produce_audio(&reply).await {
            AudioOutcome::Stored(path) => {
                tracing::info!(path = %path.display(), "Turn completed with audio");
                TurnResult::with_audio(reply, path)
            }
            AudioOutcome::NotConfigured => {
                tracing::debug!("Speech synthesis not configured, text only");
                TurnResult::text_only(reply)
            }
            AudioOutcome::SynthesisFailed(e) => {
                tracing::warn!(error = %e, "Speech synthesis failed, text only");
                TurnResult::text_only(reply)
            }
            AudioOutcome::DownloadFailed(e) => {
                tracing::warn!(error = %e, "Audio download failed, text only");
                TurnResult::text_only(reply)
            }
            AudioOutcome::PersistFailed(e) => {
                tracing::error!(error = %e, "Failed to save audio, text only");
                TurnResult::text_only(reply)
            }
        }
    }

    async fn produce_audio(&self, text: &str) -> AudioOutcome {
        if !self.synthesizer.is_configured() {
            return AudioOutcome::NotConfigured;
        }

        let audio_url = match self.synthesizer.synthesize(text).await {
            SynthesisResult::Success { audio_url, .. } => audio_url,
            SynthesisResult::Failure(SpeechError::NotConfigured) => {
                return AudioOutcome::NotConfigured
            }
            SynthesisResult::Failure(e) => return AudioOutcome::SynthesisFailed(e),
        };

        let (bytes, filename) = match self.fetcher.download(&audio_url).await {
            DownloadResult::Success {
                bytes,
                suggested_filename,
            } => (bytes, suggested_filename),
            DownloadResult::Failure(e) => return AudioOutcome::DownloadFailed(e),
        };

        match self.storage.save_audio(&filename, &bytes).await {
            Ok(path) => AudioOutcome::Stored(path),
            Err(e) => AudioOutcome::PersistFailed(e),
        }
    }
}
