//! In-Memory Conversation Store Implementation

use dashmap::DashMap;
use std::collections::VecDeque;

use crate::application::ports::{ChatMessage, ConversationError, ConversationStorePort};

/// user_id 最大长度（字节）
const MAX_USER_ID_LEN: usize = 128;

/// 内存聊天历史
///
/// 每个用户一个有界队列，写入时持有该条目的锁
pub struct InMemoryConversationStore {
    conversations: DashMap<String, VecDeque<ChatMessage>>,
    max_history: usize,
}

impl InMemoryConversationStore {
    pub fn new(max_history: usize) -> Self {
        Self {
            conversations: DashMap::new(),
            max_history: max_history.max(1),
        }
    }

    /// 当前有历史记录的用户数
    pub fn user_count(&self) -> usize {
        self.conversations.len()
    }
}

impl ConversationStorePort for InMemoryConversationStore {
    fn append(&self, user_id: &str, message: ChatMessage) -> Result<(), ConversationError> {
        if user_id.len() > MAX_USER_ID_LEN {
            return Err(ConversationError::InvalidUserId(format!(
                "user_id longer than {} bytes",
                MAX_USER_ID_LEN
            )));
        }

        let mut history = self
            .conversations
            .entry(user_id.to_string())
            .or_insert_with(|| VecDeque::with_capacity(self.max_history));
        history.push_back(message);
        while history.len() > self.max_history {
            history.pop_front();
        }

        tracing::debug!(user_id = %user_id, len = history.len(), "Chat message appended");
        Ok(())
    }

    fn history(&self, user_id: &str) -> Vec<ChatMessage> {
        self.conversations
            .get(user_id)
            .map(|h| h.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn clear(&self, user_id: &str) -> usize {
        self.conversations
            .remove(user_id)
            .map(|(_, h)| h.len())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::Sender;

    #[test]
    fn test_oldest_messages_dropped() {
        let store = InMemoryConversationStore::new(3);
        for i in 0..5 {
            store
                .append("u1", ChatMessage::new(Sender::User, format!("m{}", i)))
                .unwrap();
        }

        let history: Vec<_> = store.history("u1").into_iter().map(|m| m.message).collect();
        assert_eq!(history, ["m2", "m3", "m4"]);
    }

    #[test]
    fn test_users_are_isolated() {
        let store = InMemoryConversationStore::new(10);
        store.append("a", ChatMessage::new(Sender::User, "hi")).unwrap();
        store.append("b", ChatMessage::new(Sender::Bot, "yo")).unwrap();

        assert_eq!(store.user_count(), 2);
        assert_eq!(store.clear("a"), 1);
        assert!(store.history("a").is_empty());
        assert_eq!(store.history("b").len(), 1);
        assert_eq!(store.clear("missing"), 0);
    }

    #[test]
    fn test_long_user_id_rejected() {
        let store = InMemoryConversationStore::new(10);
        let id = "x".repeat(MAX_USER_ID_LEN + 1);
        assert!(store.append(&id, ChatMessage::new(Sender::User, "hi")).is_err());
        assert_eq!(store.user_count(), 0);
    }

    #[test]
    fn test_concurrent_appends_stay_bounded() {
        let store = std::sync::Arc::new(InMemoryConversationStore::new(10));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        store
                            .append("shared", ChatMessage::new(Sender::User, format!("{}-{}", t, i)))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.history("shared").len(), 10);
    }
}
