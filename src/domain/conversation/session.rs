//! Conversation Session - 会话历史

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 一轮对话（用户输入 + 回复）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub utterance: String,
    pub reply: String,
}

impl Exchange {
    pub fn new(utterance: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            utterance: utterance.into(),
            reply: reply.into(),
        }
    }
}

/// 对话会话
///
/// 不变量:
/// - 只在 LLM 成功生成后追加，回退路径不修改历史
/// - 历史不截断，清空聊天界面也不会重置
#[derive(Debug, Clone)]
pub struct ConversationSession {
    history: Vec<Exchange>,
    created_at: DateTime<Utc>,
    last_activity: DateTime<Utc>,
}

impl ConversationSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            history: Vec::new(),
            created_at: now,
            last_activity: now,
        }
    }

    /// 记录一轮成功的对话
    pub fn record(&mut self, utterance: impl Into<String>, reply: impl Into<String>) {
        self.history.push(Exchange::new(utterance, reply));
        self.last_activity = Utc::now();
    }

    pub fn history(&self) -> &[Exchange] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends_in_order() {
        let mut session = ConversationSession::new();
        assert!(session.is_empty());

        session.record("a", "1");
        session.record("b", "2");

        assert_eq!(session.len(), 2);
        assert_eq!(session.history()[0], Exchange::new("a", "1"));
        assert_eq!(session.history()[1], Exchange::new("b", "2"));
        assert!(session.last_activity() >= session.created_at());
    }
}
