//! 测试用 Port 实现

use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{
    audio_filename_for_url, validate_filename, AudioFetcherPort, AudioStorageError,
    AudioStoragePort, DownloadError, DownloadResult, LanguageModelPort, LlmError, SpeechError,
    SpeechSynthesizerPort, SynthesisResult,
};

/// 按脚本依次返回结果的 LLM
pub struct FakeLanguageModel {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    prompts: Mutex<Vec<String>>,
}

impl FakeLanguageModel {
    pub fn new(replies: Vec<Result<String, LlmError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModelPort for FakeLanguageModel {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::ServiceError("no scripted reply".to_string())))
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

/// 固定结果的语音合成
pub struct FakeSynthesizer {
    configured: bool,
    result: SynthesisResult,
    texts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl FakeSynthesizer {
    pub fn success(audio_url: &str) -> Self {
        Self::with_result(
            true,
            SynthesisResult::Success {
                audio_url: audio_url.to_string(),
                raw_response: serde_json::json!({ "audioFile": audio_url }),
            },
        )
    }

    pub fn failure(error: SpeechError) -> Self {
        Self::with_result(true, SynthesisResult::Failure(error))
    }

    pub fn unconfigured() -> Self {
        Self::with_result(false, SynthesisResult::Failure(SpeechError::NotConfigured))
    }

    fn with_result(configured: bool, result: SynthesisResult) -> Self {
        Self {
            configured,
            result,
            texts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizerPort for FakeSynthesizer {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn synthesize(&self, text: &str) -> SynthesisResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.texts.lock().unwrap().push(text.to_string());
        self.result.clone()
    }
}

/// 依次返回音频内容的下载器，文件名按请求 URL 生成
pub struct FakeFetcher {
    bodies: Mutex<VecDeque<Vec<u8>>>,
    error: Option<DownloadError>,
    urls: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn ok(bytes: Vec<u8>) -> Self {
        Self::sequence(vec![bytes])
    }

    pub fn sequence(bodies: Vec<Vec<u8>>) -> Self {
        Self {
            bodies: Mutex::new(bodies.into()),
            error: None,
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn failure(error: DownloadError) -> Self {
        Self {
            bodies: Mutex::new(VecDeque::new()),
            error: Some(error),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.urls.lock().unwrap().len()
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AudioFetcherPort for FakeFetcher {
    async fn download(&self, url: &str) -> DownloadResult {
        self.urls.lock().unwrap().push(url.to_string());
        if let Some(error) = &self.error {
            return DownloadResult::Failure(error.clone());
        }

        let mut bodies = self.bodies.lock().unwrap();
        // 脚本用完后重复最后一个
        let bytes = if bodies.len() > 1 {
            bodies.pop_front().unwrap_or_default()
        } else {
            bodies.front().cloned().unwrap_or_default()
        };

        DownloadResult::Success {
            bytes,
            suggested_filename: audio_filename_for_url(url),
        }
    }
}

/// 内存音频存储
pub struct MemoryAudioStorage {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryAudioStorage {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, filename: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(filename).cloned()
    }

    pub fn len(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AudioStoragePort for MemoryAudioStorage {
    fn get_audio_path(&self, filename: &str) -> PathBuf {
        PathBuf::from("memory").join(filename)
    }

    async fn save_audio(&self, filename: &str, data: &[u8]) -> Result<PathBuf, AudioStorageError> {
        validate_filename(filename)?;
        self.files
            .lock()
            .unwrap()
            .insert(filename.to_string(), data.to_vec());
        Ok(self.get_audio_path(filename))
    }

    async fn read_audio(&self, filename: &str) -> Result<Vec<u8>, AudioStorageError> {
        self.get(filename)
            .ok_or_else(|| AudioStorageError::FileNotFound(filename.to_string()))
    }

    async fn audio_exists(&self, filename: &str) -> bool {
        self.files.lock().unwrap().contains_key(filename)
    }
}

/// 写入总是失败的存储
pub struct FailingStorage;

#[async_trait]
impl AudioStoragePort for FailingStorage {
    fn get_audio_path(&self, filename: &str) -> PathBuf {
        PathBuf::from("readonly").join(filename)
    }

    async fn save_audio(&self, _filename: &str, _data: &[u8]) -> Result<PathBuf, AudioStorageError> {
        Err(AudioStorageError::IoError("read-only file system".to_string()))
    }

    async fn read_audio(&self, filename: &str) -> Result<Vec<u8>, AudioStorageError> {
        Err(AudioStorageError::FileNotFound(filename.to_string()))
    }

    async fn audio_exists(&self, _filename: &str) -> bool {
        false
    }
}
