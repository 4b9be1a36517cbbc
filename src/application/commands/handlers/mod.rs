//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod chat_handlers;

pub use chat_handlers::*;
