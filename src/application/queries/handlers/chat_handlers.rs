//! Chat Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ChatMessage, ConversationStorePort};
use crate::application::queries::GetConversation;

/// 聊天历史响应
#[derive(Debug, Clone)]
pub struct ConversationResponse {
    pub user_id: String,
    pub history: Vec<ChatMessage>,
}

/// GetConversation Handler
pub struct GetConversationHandler {
    store: Arc<dyn ConversationStorePort>,
}

impl GetConversationHandler {
    pub fn new(store: Arc<dyn ConversationStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetConversation) -> Result<ConversationResponse, ApplicationError> {
        let history = self.store.history(&query.user_id);
        Ok(ConversationResponse {
            user_id: query.user_id,
            history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::Sender;
    use crate::infrastructure::memory::InMemoryConversationStore;

    #[tokio::test]
    async fn test_unknown_user_has_empty_history() {
        let store = Arc::new(InMemoryConversationStore::new(10));
        let handler = GetConversationHandler::new(store);

        let result = handler
            .handle(GetConversation {
                user_id: "nobody".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(result.user_id, "nobody");
        assert!(result.history.is_empty());
    }

    #[tokio::test]
    async fn test_history_in_order() {
        let store = Arc::new(InMemoryConversationStore::new(10));
        store.append("u1", ChatMessage::new(Sender::User, "first")).unwrap();
        store.append("u1", ChatMessage::new(Sender::Bot, "second")).unwrap();

        let handler = GetConversationHandler::new(store);
        let result = handler
            .handle(GetConversation {
                user_id: "u1".to_string(),
            })
            .await
            .unwrap();
        let messages: Vec<_> = result.history.iter().map(|m| m.message.as_str()).collect();
        assert_eq!(messages, ["first", "second"]);
    }
}
