//! Fallback Responder - 确定性的关键词回复表
//!
//! 当 LLM 未配置或调用失败时使用，不依赖任何网络或进程状态

/// 关键词规则：任一关键词命中即返回对应回复
struct FallbackRule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

/// 规则按优先级排列，第一个命中的规则生效
const RULES: &[FallbackRule] = &[
    FallbackRule {
        keywords: &["memorable", "experience"],
        reply: "One of my most memorable travel experiences was hiking through the Swiss Alps at sunrise. The way the light hit the snow-capped peaks was absolutely magical!",
    },
    FallbackRule {
        keywords: &["hidden", "gem"],
        reply: "I discovered this incredible little island in Thailand called Koh Lipe. It's not as crowded as the other islands, with crystal clear water and amazing snorkeling right off the beach!",
    },
    FallbackRule {
        keywords: &["prepare", "culture"],
        reply: "I always research local customs first, learn a few basic phrases in the local language, pack light but smart, and make sure to try the street food - it's often the most authentic!",
    },
    FallbackRule {
        keywords: &["adventure", "sport"],
        reply: "I tried paragliding in Nepal over the Himalayas - absolutely breathtaking views and such an adrenaline rush!",
    },
    FallbackRule {
        keywords: &["one country", "rest of your life"],
        reply: "That's tough! I'd probably choose Japan - it has this perfect blend of ancient tradition and futuristic innovation, amazing food, and the people are incredibly kind.",
    },
];

/// 无规则命中时的通用回复
pub const GENERIC_REPLY: &str = "I'd love to share more about my travel adventures! While I'm having some technical difficulties with my full capabilities, I can tell you about amazing destinations, travel tips, or cultural experiences. What would you like to know?";

/// 根据用户输入返回固定回复（大小写不敏感的子串匹配）
pub fn fallback_reply(utterance: &str) -> &'static str {
    let lowered = utterance.to_lowercase();

    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|rule| rule.reply)
        .unwrap_or(GENERIC_REPLY)
}
