//! LLM Adapter - OpenAI 兼容 Chat Completions 客户端

mod openai_chat_client;

pub use openai_chat_client::*;
