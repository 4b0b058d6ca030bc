//! HTTP Speech Client - 调用远程语音合成服务
//!
//! 实现 SpeechSynthesizerPort trait
//!
//! 外部 TTS API:
//! POST https://api.murf.ai/v1/speech/generate
//! Request: {"voiceId": "Caleb", "text": "...", "format": "MP3"}  (JSON, Bearer 认证)
//! Response: {"audioFile": "https://...", ...}

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{SpeechError, SpeechSynthesizerPort, SynthesisResult};

/// 合成请求体 (JSON)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechHttpRequest<'a> {
    voice_id: &'a str,
    text: &'a str,
    format: &'a str,
}

/// HTTP 语音合成客户端配置
#[derive(Debug, Clone)]
pub struct HttpSpeechClientConfig {
    /// 合成接口 URL
    pub url: String,
    /// API Key，None 表示未配置
    pub api_key: Option<String>,
    /// 账号 ID
    pub user_id: Option<String>,
    /// 音色 ID
    pub voice_id: String,
    /// 输出格式
    pub format: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpSpeechClientConfig {
    fn default() -> Self {
        Self {
            url: "https://api.murf.ai/v1/speech/generate".to_string(),
            api_key: None,
            user_id: None,
            voice_id: "Caleb".to_string(),
            format: "MP3".to_string(),
            timeout_secs: 30,
        }
    }
}

impl HttpSpeechClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 语音合成客户端
pub struct HttpSpeechClient {
    client: Client,
    config: HttpSpeechClientConfig,
}

impl HttpSpeechClient {
    /// 创建新的语音合成客户端
    pub fn new(config: HttpSpeechClientConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SpeechError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 使用默认配置创建客户端
    pub fn with_default_config() -> Result<Self, SpeechError> {
        Self::new(HttpSpeechClientConfig::default())
    }

    async fn request_audio_url(&self, api_key: &str, text: &str) -> Result<SynthesisResult, SpeechError> {
        let http_request = SpeechHttpRequest {
            voice_id: &self.config.voice_id,
            text,
            format: &self.config.format,
        };

        tracing::debug!(
            url = %self.config.url,
            voice_id = %self.config.voice_id,
            text_len = text.len(),
            "Sending speech synthesis request"
        );

        let mut request = self
            .client
            .post(&self.config.url)
            .header(ACCEPT, "application/json")
            .bearer_auth(api_key)
            .json(&http_request);
        if let Some(user_id) = &self.config.user_id {
            request = request.header("X-User-Id", user_id);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                SpeechError::Timeout
            } else if e.is_connect() {
                SpeechError::NetworkError(format!("Cannot connect to TTS service: {}", e))
            } else {
                SpeechError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }

        let raw_response: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(e.to_string()))?;

        let audio_url = raw_response
            .get("audioFile")
            .and_then(|v| v.as_str())
            .filter(|url| !url.is_empty())
            .ok_or(SpeechError::MissingAudioUrl)?
            .to_string();

        tracing::info!(audio_url = %audio_url, "Speech synthesis completed");

        Ok(SynthesisResult::Success {
            audio_url,
            raw_response,
        })
    }
}

#[async_trait]
impl SpeechSynthesizerPort for HttpSpeechClient {
    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    async fn synthesize(&self, text: &str) -> SynthesisResult {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return SynthesisResult::Failure(SpeechError::NotConfigured);
        };

        match self.request_audio_url(api_key, text).await {
            Ok(result) => result,
            Err(e) => SynthesisResult::Failure(e),
        }
    }
}
