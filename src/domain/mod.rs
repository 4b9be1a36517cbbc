//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Catalog Context: 商品目录
//! - Account Context: 用户账户
//! - Conversation Context: 聊天助手

pub mod account;
pub mod catalog;
pub mod conversation;
