//! Audio Fetcher Port - 远程音频下载抽象

use async_trait::async_trait;
use thiserror::Error;

/// 下载失败原因
#[derive(Debug, Clone, Error)]
pub enum DownloadError {
    #[error("download failed, status {0}")]
    BadStatus(u16),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Failed to read body: {0}")]
    BodyError(String),
}

/// 单次下载尝试的结果
#[derive(Debug, Clone)]
pub enum DownloadResult {
    Success {
        bytes: Vec<u8>,
        suggested_filename: String,
    },
    Failure(DownloadError),
}

impl DownloadResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Audio Fetcher Port
#[async_trait]
pub trait AudioFetcherPort: Send + Sync {
    async fn download(&self, url: &str) -> DownloadResult;
}

/// 根据音频 URL 生成文件名
///
/// 使用 md5(url) 的前 8 位十六进制，相同 URL 得到相同文件名（重复下载时覆盖）
pub fn audio_filename_for_url(url: &str) -> String {
    let digest = md5::compute(url.as_bytes());
    let hex = format!("{:x}", digest);
    format!("audio_{}.mp3", &hex[..8])
}
