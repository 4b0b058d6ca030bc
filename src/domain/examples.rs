//! 示例问题

/// 界面展示的示例问题，每条都对应一个回退回复分组
pub const EXAMPLE_QUESTIONS: &[&str] = &[
    "What's the most memorable travel experience you've had so far?",
    "Share a hidden gem destination that you discovered during your travels.",
    "How do you prepare for a trip to a new country with a different culture?",
    "Tell me about an exciting activity or adventure sport you've tried during your travels.",
    "If you could only visit one country for the rest of your life, which one would it be, and why?",
];
