//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod chat_handlers;

pub use chat_handlers::*;
