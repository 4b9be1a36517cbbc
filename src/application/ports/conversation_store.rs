//! Conversation Store Port - 聊天历史
//!
//! 定义会话历史存储的抽象接口，具体实现在 infrastructure/memory 层

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Conversation Store 错误
#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("Invalid user id: {0}")]
    InvalidUserId(String),
}

/// 消息发送方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// 单条聊天消息
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender: Sender, message: impl Into<String>) -> Self {
        Self {
            sender,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Conversation Store Port
///
/// 每个用户只保留最近 N 条消息
pub trait ConversationStorePort: Send + Sync {
    /// 追加消息，超出上限时丢弃最旧的
    fn append(&self, user_id: &str, message: ChatMessage) -> Result<(), ConversationError>;

    /// 获取用户历史（从旧到新）
    fn history(&self, user_id: &str) -> Vec<ChatMessage>;

    /// 清空用户历史，返回被清除的条数
    fn clear(&self, user_id: &str) -> usize;
}
