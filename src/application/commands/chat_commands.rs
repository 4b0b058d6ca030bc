//! Chat Commands - 对话相关命令

/// 界面显示用的一轮对话（用户输入, 回复）
pub type DisplayExchange = (String, String);

/// 发送消息命令
#[derive(Debug, Clone)]
pub struct ChatCommand {
    pub message: String,
    /// 界面当前显示的历史（与 LLM 会话历史相互独立）
    pub history: Vec<DisplayExchange>,
}

/// 发送消息响应
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub history: Vec<DisplayExchange>,
    pub reply: String,
    /// 本轮音频文件名（存储目录内）
    pub audio_file: Option<String>,
}

/// 清空聊天命令（只清空界面历史，不重置 LLM 会话）
#[derive(Debug, Clone, Default)]
pub struct ClearChatCommand;

/// 清空聊天响应
#[derive(Debug, Clone)]
pub struct ClearChatResponse {
    pub history: Vec<DisplayExchange>,
    pub audio_file: Option<String>,
}
