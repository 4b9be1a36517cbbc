//! Chat Commands

use serde::{Deserialize, Serialize};

/// 回复语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

/// 发送聊天消息命令
#[derive(Debug, Clone)]
pub struct SendChatMessage {
    pub user_id: String,
    pub message: String,
    pub language: Language,
}

/// 清空聊天历史命令
#[derive(Debug, Clone)]
pub struct ClearConversation {
    pub user_id: String,
}
