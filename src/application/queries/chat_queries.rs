//! Chat Queries

/// 获取聊天历史查询
#[derive(Debug, Clone)]
pub struct GetConversation {
    pub user_id: String,
}
