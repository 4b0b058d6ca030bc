//! Audio Queries - 音频查询

/// 获取音频查询
#[derive(Debug, Clone)]
pub struct GetAudioQuery {
    pub filename: String,
}

/// 获取音频响应
#[derive(Debug, Clone)]
pub struct GetAudioResponse {
    pub audio_data: Vec<u8>,
    pub content_type: &'static str,
}
