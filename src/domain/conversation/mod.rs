//! Conversation Context - 聊天助手限界上下文
//!
//! 职责:
//! - 埃及方言归一化
//! - 意图识别与参数提取
//! - 意图回复模板

mod dialect;
mod intent;
mod replies;

pub use dialect::{fold, DialectNormalizer};
pub use intent::{Intent, IntentDetector, IntentParams};
pub use replies::{reply_for, FALLBACK_REPLY};
