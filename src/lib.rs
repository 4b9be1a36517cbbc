//! BWW Store - 电商后端 API
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Catalog Context: 商品模型
//! - Account Context: 用户模型
//! - Conversation Context: 埃及方言归一化、意图识别、回复模板
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ConversationStore, Repositories）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（商品、订单、用户、聊天、Webhook）
//! - Memory: ConversationStore 内存实现
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
