//! Audio Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{validate_filename, AudioStoragePort};
use crate::application::queries::audio_queries::*;

/// GetAudio Handler - 读取已保存的音频文件
pub struct GetAudioHandler {
    storage: Arc<dyn AudioStoragePort>,
}

impl GetAudioHandler {
    pub fn new(storage: Arc<dyn AudioStoragePort>) -> Self {
        Self { storage }
    }

    pub async fn handle(&self, query: GetAudioQuery) -> Result<GetAudioResponse, ApplicationError> {
        validate_filename(&query.filename)?;

        let audio_data = self.storage.read_audio(&query.filename).await?;

        Ok(GetAudioResponse {
            audio_data,
            content_type: "audio/mpeg",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MemoryAudioStorage;

    #[tokio::test]
    async fn test_get_existing_audio() {
        let storage = Arc::new(MemoryAudioStorage::new());
        storage.save_audio("audio_0000abcd.mp3", b"ID3").await.unwrap();
        let handler = GetAudioHandler::new(storage);

        let response = handler
            .handle(GetAudioQuery {
                filename: "audio_0000abcd.mp3".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.audio_data, b"ID3");
        assert_eq!(response.content_type, "audio/mpeg");
    }

    #[tokio::test]
    async fn test_missing_audio_is_not_found() {
        let handler = GetAudioHandler::new(Arc::new(MemoryAudioStorage::new()));

        let err = handler
            .handle(GetAudioQuery {
                filename: "audio_ffffffff.mp3".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_path_traversal_rejected() {
        let handler = GetAudioHandler::new(Arc::new(MemoryAudioStorage::new()));

        let err = handler
            .handle(GetAudioQuery {
                filename: "../secret".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }
}
