//! Download Adapter - HTTP 音频下载实现

mod http_audio_fetcher;

pub use http_audio_fetcher::*;
