//! File Storage - 文件系统音频存储实现
//!
//! 实现 AudioStoragePort trait

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{validate_filename, AudioStorageError, AudioStoragePort};

/// 文件系统音频存储
pub struct FileAudioStorage {
    /// 存储根目录
    base_dir: PathBuf,
}

impl FileAudioStorage {
    /// 创建新的文件存储
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, AudioStorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        // 确保目录存在
        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        Ok(Self { base_dir })
    }

    /// 获取存储根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[async_trait]
impl AudioStoragePort for FileAudioStorage {
    fn get_audio_path(&self, filename: &str) -> PathBuf {
        self.base_dir.join(filename)
    }

    async fn save_audio(&self, filename: &str, data: &[u8]) -> Result<PathBuf, AudioStorageError> {
        validate_filename(filename)?;

        let audio_path = self.get_audio_path(filename);
        // 先写临时文件再 rename，避免留下写了一半的文件
        let tmp_path = self.base_dir.join(format!(".{}.part", filename));

        let write_result = async {
            let mut file = fs::File::create(&tmp_path).await?;
            file.write_all(data).await?;
            file.sync_all().await?;
            fs::rename(&tmp_path, &audio_path).await
        }
        .await;

        if let Err(e) = write_result {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(AudioStorageError::IoError(e.to_string()));
        }

        tracing::debug!(
            "Saved audio: file={}, size={} bytes",
            audio_path.display(),
            data.len()
        );

        Ok(audio_path)
    }

    async fn read_audio(&self, filename: &str) -> Result<Vec<u8>, AudioStorageError> {
        validate_filename(filename)?;
        let audio_path = self.get_audio_path(filename);

        if !audio_path.exists() {
            return Err(AudioStorageError::FileNotFound(
                audio_path.to_string_lossy().to_string(),
            ));
        }

        fs::read(&audio_path)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))
    }

    async fn audio_exists(&self, filename: &str) -> bool {
        validate_filename(filename).is_ok() && self.get_audio_path(filename).is_file()
    }
}
