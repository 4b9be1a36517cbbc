//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Repository、ConversationStore）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    ClearConversation,
    Language,
    SendChatMessage,
    // Handlers
    handlers::{ClearConversationHandler, SendChatMessageHandler, SendChatMessageResponse},
};

pub use error::ApplicationError;

pub use ports::{
    // Conversation store
    ChatMessage,
    ConversationError,
    ConversationStorePort,
    Sender,
    // Repositories
    ProductRecord,
    ProductRepositoryPort,
    RepositoryError,
    UserRecord,
    UserRepositoryPort,
};

pub use queries::{
    GetConversation,
    // Handlers
    handlers::{ConversationResponse, GetConversationHandler},
};
