//! HTTP Audio Fetcher - 下载远程音频到内存
//!
//! 实现 AudioFetcherPort trait

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::application::ports::{
    audio_filename_for_url, AudioFetcherPort, DownloadError, DownloadResult,
};

/// 下载器配置
#[derive(Debug, Clone)]
pub struct HttpAudioFetcherConfig {
    /// 下载超时时间（秒），包含读取响应体
    pub timeout_secs: u64,
}

impl Default for HttpAudioFetcherConfig {
    fn default() -> Self {
        Self { timeout_secs: 15 }
    }
}

/// HTTP 音频下载器
pub struct HttpAudioFetcher {
    client: Client,
}

impl HttpAudioFetcher {
    pub fn new(config: HttpAudioFetcherConfig) -> Result<Self, DownloadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DownloadError::NetworkError(e.to_string()))?;

        Ok(Self { client })
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                DownloadError::Timeout
            } else {
                DownloadError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(DownloadError::BadStatus(status.as_u16()));
        }

        // 流式读取完整响应体
        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| {
                if e.is_timeout() {
                    DownloadError::Timeout
                } else {
                    DownloadError::BodyError(e.to_string())
                }
            })?;
            bytes.extend_from_slice(&chunk);
        }

        Ok(bytes)
    }
}

#[async_trait]
impl AudioFetcherPort for HttpAudioFetcher {
    async fn download(&self, url: &str) -> DownloadResult {
        match self.fetch(url).await {
            Ok(bytes) => {
                let suggested_filename = audio_filename_for_url(url);
                tracing::debug!(
                    url = %url,
                    size = bytes.len(),
                    filename = %suggested_filename,
                    "Audio downloaded"
                );
                DownloadResult::Success {
                    bytes,
                    suggested_filename,
                }
            }
            Err(e) => DownloadResult::Failure(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::test_support::spawn_stub;
    use axum::{http::StatusCode as HttpStatus, routing::get, Router};

    async fn audio() -> Vec<u8> {
        vec![0xFF; 200]
    }

    async fn missing() -> HttpStatus {
        HttpStatus::NOT_FOUND
    }

    async fn no_content() -> HttpStatus {
        HttpStatus::NO_CONTENT
    }

    async fn slow() -> Vec<u8> {
        tokio::time::sleep(Duration::from_secs(3)).await;
        vec![1, 2, 3]
    }

    async fn stub() -> String {
        let router = Router::new()
            .route("/a.mp3", get(audio))
            .route("/missing.mp3", get(missing))
            .route("/empty.mp3", get(no_content))
            .route("/slow.mp3", get(slow));
        spawn_stub(router).await
    }

    fn fetcher(timeout_secs: u64) -> HttpAudioFetcher {
        HttpAudioFetcher::new(HttpAudioFetcherConfig { timeout_secs }).unwrap()
    }

    #[tokio::test]
    async fn test_download_success() {
        let base = stub().await;
        let url = format!("{}/a.mp3", base);

        match fetcher(5).download(&url).await {
            DownloadResult::Success {
                bytes,
                suggested_filename,
            } => {
                assert_eq!(bytes, vec![0xFF; 200]);
                assert_eq!(suggested_filename, audio_filename_for_url(&url));
            }
            DownloadResult::Failure(e) => panic!("unexpected failure: {}", e),
        }
    }

    #[tokio::test]
    async fn test_same_url_same_filename() {
        let base = stub().await;
        let url = format!("{}/a.mp3", base);
        let fetcher = fetcher(5);

        let name = |r: DownloadResult| match r {
            DownloadResult::Success {
                suggested_filename, ..
            } => suggested_filename,
            DownloadResult::Failure(e) => panic!("unexpected failure: {}", e),
        };

        let first = name(fetcher.download(&url).await);
        let second = name(fetcher.download(&url).await);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let base = stub().await;

        let result = fetcher(5).download(&format!("{}/missing.mp3", base)).await;

        match result {
            DownloadResult::Failure(e) => {
                assert!(matches!(e, DownloadError::BadStatus(404)));
                assert_eq!(e.to_string(), "download failed, status 404");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_200_success_status_is_failure() {
        let base = stub().await;

        let result = fetcher(5).download(&format!("{}/empty.mp3", base)).await;

        assert!(matches!(
            result,
            DownloadResult::Failure(DownloadError::BadStatus(204))
        ));
    }

    #[tokio::test]
    async fn test_timeout() {
        let base = stub().await;

        let result = fetcher(1).download(&format!("{}/slow.mp3", base)).await;

        assert!(matches!(
            result,
            DownloadResult::Failure(DownloadError::Timeout)
        ));
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let result = fetcher(5).download("not a url").await;
        assert!(!result.is_success());
    }
}
