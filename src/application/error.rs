//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::ConversationError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

impl From<ConversationError> for ApplicationError {
    fn from(err: ConversationError) -> Self {
        match err {
            ConversationError::InvalidUserId(_) => Self::ValidationError(err.to_string()),
        }
    }
}
