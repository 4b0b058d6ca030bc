//! Conversation Context - 对话上下文
//!
//! 职责:
//! - 会话历史（ConversationSession）
//! - 旅行人设 Prompt 模板

mod persona;
mod session;

pub use persona::{render_prompt, PERSONA};
pub use session::{ConversationSession, Exchange};
