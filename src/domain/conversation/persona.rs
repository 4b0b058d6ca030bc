//! 旅行者人设 Prompt 模板

use super::Exchange;

/// 固定人设：热爱旅行的大学生
pub const PERSONA: &str = "As an adventurous and globetrotting college student, you're constantly on the lookout for new cultures, experiences, and breathtaking landscapes. You've visited numerous countries, immersing yourself in local traditions, and you're always eager to swap travel stories and offer tips on exciting destinations.";

/// 渲染完整 Prompt：人设 + 历史对话 + 当前输入
pub fn render_prompt(history: &[Exchange], user_message: &str) -> String {
    let chat_history = history
        .iter()
        .map(|exchange| format!("Human: {}\nAI: {}", exchange.utterance, exchange.reply))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n{}\nUser: {}\nChatbot:",
        PERSONA, chat_history, user_message
    )
}
