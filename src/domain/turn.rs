//! Turn Result - 单轮对话的最终输出

use std::path::PathBuf;

/// 一轮对话的结果，交给 UI 渲染
///
/// 不变量:
/// - `audio_file` 仅在合成、下载、写盘全部成功时为 Some
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    pub reply_text: String,
    pub audio_file: Option<PathBuf>,
}

impl TurnResult {
    /// 仅文本（音频降级）
    pub fn text_only(reply_text: impl Into<String>) -> Self {
        Self {
            reply_text: reply_text.into(),
            audio_file: None,
        }
    }

    /// 文本 + 本地音频文件
    pub fn with_audio(reply_text: impl Into<String>, audio_file: PathBuf) -> Self {
        Self {
            reply_text: reply_text.into(),
            audio_file: Some(audio_file),
        }
    }

    pub fn has_audio(&self) -> bool {
        self.audio_file.is_some()
    }
}
