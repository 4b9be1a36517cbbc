//! Application State
//!
//! 所有 Handler 和端口通过 AppState 显式传递

use std::sync::Arc;

use crate::application::{
    // Command handlers
    ClearConversationHandler, SendChatMessageHandler,
    // Query handlers
    GetConversationHandler,
    // Ports
    ConversationStorePort, ProductRepositoryPort, UserRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub product_repo: Arc<dyn ProductRepositoryPort>,
    pub user_repo: Arc<dyn UserRepositoryPort>,
    pub conversation_store: Arc<dyn ConversationStorePort>,

    // ========== Command Handlers ==========
    pub send_chat_handler: SendChatMessageHandler,
    pub clear_conversation_handler: ClearConversationHandler,

    // ========== Query Handlers ==========
    pub get_conversation_handler: GetConversationHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        product_repo: Arc<dyn ProductRepositoryPort>,
        user_repo: Arc<dyn UserRepositoryPort>,
        conversation_store: Arc<dyn ConversationStorePort>,
    ) -> Self {
        Self {
            product_repo,
            user_repo,
            conversation_store: conversation_store.clone(),

            send_chat_handler: SendChatMessageHandler::new(conversation_store.clone()),
            clear_conversation_handler: ClearConversationHandler::new(conversation_store.clone()),

            get_conversation_handler: GetConversationHandler::new(conversation_store),
        }
    }
}
