//! HTTP Handlers

mod chat;
mod health;
mod orders;
mod products;
mod users;
mod webhooks;

pub use chat::*;
pub use health::*;
pub use orders::*;
pub use products::*;
pub use users::*;
pub use webhooks::*;

use super::error::ApiError;

/// 未匹配路由
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}
