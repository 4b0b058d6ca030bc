//! Domain Layer - 领域层
//!
//! - Conversation Context: 会话历史与人设
//! - Fallback: 关键词回退回复
//! - Examples: 示例问题
//! - Turn: 单轮对话结果

pub mod conversation;
pub mod examples;
pub mod fallback;
pub mod turn;

pub use conversation::{render_prompt, ConversationSession, Exchange, PERSONA};
pub use examples::EXAMPLE_QUESTIONS;
pub use fallback::{fallback_reply, GENERIC_REPLY};
pub use turn::TurnResult;
