//! Command Handlers

mod chat_handlers;

pub use chat_handlers::*;
