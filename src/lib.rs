//! Roam - 旅行语音聊天机器人
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Conversation: 人设、对话历史与提示词
//! - Fallback: 无 LLM 时的关键词回复表
//!
//! 应用层 (application/):
//! - Ports: 端口定义（LanguageModel, SpeechSynthesizer, AudioFetcher, AudioStorage）
//! - Services: TextGenerator, ResponseOrchestrator（单轮管线，逐级降级）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Adapters: OpenAI Chat Client, Speech Client, Audio Fetcher, File Storage

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
