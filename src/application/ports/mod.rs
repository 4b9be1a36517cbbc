//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod conversation_store;
mod repositories;

pub use conversation_store::{ChatMessage, ConversationError, ConversationStorePort, Sender};
pub use repositories::{
    ProductRecord, ProductRepositoryPort, RepositoryError, UserRecord, UserRepositoryPort,
};
