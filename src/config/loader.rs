//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 凭证环境变量（OPENAI_API_KEY、MURFAI_API_KEY、MURFAI_USER_ID）
//! 2. 环境变量（前缀 `ROAM_`）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 常用凭证环境变量 -> 配置键
const SECRET_ENV_VARS: &[(&str, &str)] = &[
    ("OPENAI_API_KEY", "llm.api_key"),
    ("MURFAI_API_KEY", "tts.api_key"),
    ("MURFAI_USER_ID", "tts.user_id"),
];

/// 加载应用配置
///
/// # 环境变量示例
/// - `ROAM_SERVER__PORT=8080`
/// - `ROAM_TTS__VOICE_ID=Natalie`
/// - `ROAM_STORAGE__AUDIO_DIR=/data/audio`
/// - `OPENAI_API_KEY=sk-...`
///
/// 凭证缺失不会导致加载失败，只会禁用对应能力
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let secrets: Vec<(&str, Option<String>)> = SECRET_ENV_VARS
        .iter()
        .map(|(var, key)| (*key, std::env::var(var).ok()))
        .collect();

    build_config(config_path, &secrets)
}

fn build_config(
    config_path: Option<&Path>,
    secrets: &[(&str, Option<String>)],
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 7860)?
        .set_default("llm.base_url", "https://api.openai.com/v1")?
        .set_default("llm.model", "gpt-3.5-turbo")?
        .set_default("llm.temperature", 0.5)?
        .set_default("tts.url", "https://api.murf.ai/v1/speech/generate")?
        .set_default("tts.voice_id", "Caleb")?
        .set_default("tts.format", "MP3")?
        .set_default("tts.timeout_secs", 30)?
        .set_default("download.timeout_secs", 15)?
        .set_default("storage.audio_dir", "data/audio")?
        .set_default("log.level", "info")?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量，例如 ROAM_TTS__TIMEOUT_SECS=60
    builder = builder.add_source(
        Environment::with_prefix("ROAM")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 凭证环境变量（最高优先级）
    for (key, value) in secrets {
        builder = builder.set_override_option(*key, value.clone())?;
    }

    let config = builder.build()?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;
    let app_config = app_config.normalize();

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.llm.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "LLM base URL cannot be empty".to_string(),
        ));
    }

    if !(0.0..=2.0).contains(&config.llm.temperature) {
        return Err(ConfigError::ValidationError(format!(
            "LLM temperature must be within 0.0..=2.0, got {}",
            config.llm.temperature
        )));
    }

    if config.tts.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS URL cannot be empty".to_string(),
        ));
    }

    if config.tts.timeout_secs == 0 || config.download.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Network timeouts must be greater than 0".to_string(),
        ));
    }

    if config.storage.audio_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Audio directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志，凭证只显示是否配置）
pub fn print_config(config: &AppConfig) {
    let configured = |v: &Option<String>| if v.is_some() { "configured" } else { "missing" };

    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("LLM Model: {} ({})", config.llm.model, config.llm.base_url);
    tracing::info!("LLM API Key: {}", configured(&config.llm.api_key));
    tracing::info!("TTS URL: {}", config.tts.url);
    tracing::info!("TTS Voice: {} ({})", config.tts.voice_id, config.tts.format);
    tracing::info!("TTS API Key: {}", configured(&config.tts.api_key));
    tracing::info!("TTS User ID: {}", configured(&config.tts.user_id));
    tracing::info!("TTS Timeout: {}s", config.tts.timeout_secs);
    tracing::info!("Download Timeout: {}s", config.download.timeout_secs);
    tracing::info!("Audio Directory: {:?}", config.storage.audio_dir);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
