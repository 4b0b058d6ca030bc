//! Status Queries - 能力状态与示例问题

/// 查询当前启用的能力
#[derive(Debug, Clone, Default)]
pub struct GetStatusQuery;

/// 能力状态响应
#[derive(Debug, Clone)]
pub struct GetStatusResponse {
    pub llm_enabled: bool,
    pub tts_enabled: bool,
    /// 文本后端描述（模型名或 fallback）
    pub text_backend: String,
    /// 展示给用户的降级提示
    pub notes: Vec<String>,
}

/// 列出示例问题
#[derive(Debug, Clone, Default)]
pub struct ListExamplesQuery;
