//! Audio Storage Port - 出站端口
//!
//! 本地音频文件的写入与读取

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// 音频存储错误
#[derive(Debug, Error)]
pub enum AudioStorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Audio Storage Port - 出站端口
#[async_trait]
pub trait AudioStoragePort: Send + Sync {
    /// 获取音频文件路径
    fn get_audio_path(&self, filename: &str) -> PathBuf;

    /// 保存音频数据（同名文件直接覆盖）
    async fn save_audio(&self, filename: &str, data: &[u8]) -> Result<PathBuf, AudioStorageError>;

    /// 读取音频数据
    async fn read_audio(&self, filename: &str) -> Result<Vec<u8>, AudioStorageError>;

    /// 检查音频是否存在
    async fn audio_exists(&self, filename: &str) -> bool;
}

/// 校验文件名只包含单一路径组件
pub fn validate_filename(filename: &str) -> Result<(), AudioStorageError> {
    let invalid = filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains('\0');

    if invalid {
        return Err(AudioStorageError::InvalidFileName(filename.to_string()));
    }
    Ok(())
}
