//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// LLM 配置
    #[serde(default)]
    pub llm: LlmConfig,

    /// 语音合成配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 音频下载配置
    #[serde(default)]
    pub download: DownloadConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// 空字符串凭证视为未配置
    pub fn normalize(mut self) -> Self {
        self.llm.api_key = non_empty(self.llm.api_key);
        self.tts.api_key = non_empty(self.tts.api_key);
        self.tts.user_id = non_empty(self.tts.user_id);
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    7860
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// LLM 配置
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// API Key，未设置时使用回退回复
    #[serde(default)]
    pub api_key: Option<String>,

    /// OpenAI 兼容接口基础 URL
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,

    /// 模型名称
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// 采样温度
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_llm_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_llm_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_temperature() -> f32 {
    0.5
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_llm_base_url(),
            model: default_llm_model(),
            temperature: default_temperature(),
        }
    }
}

impl LlmConfig {
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

/// 语音合成配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    /// API Key，未设置时禁用语音
    #[serde(default)]
    pub api_key: Option<String>,

    /// 账号 ID
    #[serde(default)]
    pub user_id: Option<String>,

    /// 合成接口 URL
    #[serde(default = "default_tts_url")]
    pub url: String,

    /// 音色 ID
    #[serde(default = "default_voice_id")]
    pub voice_id: String,

    /// 输出格式
    #[serde(default = "default_tts_format")]
    pub format: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,
}

fn default_tts_url() -> String {
    "https://api.murf.ai/v1/speech/generate".to_string()
}

fn default_voice_id() -> String {
    "Caleb".to_string()
}

fn default_tts_format() -> String {
    "MP3".to_string()
}

fn default_tts_timeout() -> u64 {
    30
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            user_id: None,
            url: default_tts_url(),
            voice_id: default_voice_id(),
            format: default_tts_format(),
            timeout_secs: default_tts_timeout(),
        }
    }
}

impl TtsConfig {
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

/// 音频下载配置
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadConfig {
    /// 下载超时时间（秒）
    #[serde(default = "default_download_timeout")]
    pub timeout_secs: u64,
}

fn default_download_timeout() -> u64 {
    15
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_download_timeout(),
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 音频存储目录
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,
}

fn default_audio_dir() -> PathBuf {
    PathBuf::from("data/audio")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            audio_dir: default_audio_dir(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
