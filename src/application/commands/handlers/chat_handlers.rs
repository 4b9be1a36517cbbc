//! Chat Command Handlers

use std::sync::Arc;

use crate::application::commands::{ClearConversation, Language, SendChatMessage};
use crate::application::error::ApplicationError;
use crate::application::ports::{ChatMessage, ConversationStorePort, Sender};
use crate::domain::conversation::{reply_for, DialectNormalizer, Intent, IntentDetector, IntentParams};

// ============================================================================
// SendChatMessage
// ============================================================================

/// 聊天回复
#[derive(Debug, Clone)]
pub struct SendChatMessageResponse {
    pub reply: String,
    pub intent: Option<Intent>,
    pub params: IntentParams,
    pub language: Language,
    /// 归一化后的用户消息
    pub normalized: String,
}

/// SendChatMessage Handler
///
/// 流程: 方言归一化 -> 意图识别 -> 模板回复 -> 写入历史（用户消息 + 回复）
pub struct SendChatMessageHandler {
    store: Arc<dyn ConversationStorePort>,
    normalizer: DialectNormalizer,
    detector: IntentDetector,
}

impl SendChatMessageHandler {
    pub fn new(store: Arc<dyn ConversationStorePort>) -> Self {
        Self {
            store,
            normalizer: DialectNormalizer::new(),
            detector: IntentDetector::new(),
        }
    }

    pub async fn handle(
        &self,
        command: SendChatMessage,
    ) -> Result<SendChatMessageResponse, ApplicationError> {
        let normalized = self.normalizer.normalize(&command.message);

        // 关键词按原始措辞匹配，归一化会把方言词替换掉
        let intent = self.detector.detect(&command.message);
        let params = intent
            .map(|intent| self.detector.extract_params(&command.message, intent))
            .unwrap_or_default();

        let reply = reply_for(intent, &mut rand::thread_rng()).to_string();

        self.store.append(
            &command.user_id,
            ChatMessage::new(Sender::User, command.message.trim()),
        )?;
        self.store
            .append(&command.user_id, ChatMessage::new(Sender::Bot, reply.clone()))?;

        tracing::info!(
            user_id = %command.user_id,
            intent = intent.map(|i| i.as_str()).unwrap_or("none"),
            language = ?command.language,
            "Chat message handled"
        );

        Ok(SendChatMessageResponse {
            reply,
            intent,
            params,
            language: command.language,
            normalized,
        })
    }
}

// ============================================================================
// ClearConversation
// ============================================================================

/// ClearConversation Handler
pub struct ClearConversationHandler {
    store: Arc<dyn ConversationStorePort>,
}

impl ClearConversationHandler {
    pub fn new(store: Arc<dyn ConversationStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: ClearConversation) -> Result<usize, ApplicationError> {
        let removed = self.store.clear(&command.user_id);

        tracing::info!(
            user_id = %command.user_id,
            removed = removed,
            "Conversation cleared"
        );

        Ok(removed)
    }
}
