//! HTTP Routes
//!
//! API Endpoints:
//! - /                              GET     健康检查
//! - /api/products                  GET     商品列表（占位）
//! - /api/products                  POST    创建商品（占位）
//! - /api/products/:id              GET     商品详情（占位）
//! - /api/orders                    GET     订单列表（占位）
//! - /api/orders                    POST    创建订单（占位）
//! - /api/users/register            POST    注册（占位）
//! - /api/users/login               POST    登录（占位 token）
//! - /api/chat                      POST    聊天助手
//! - /api/chat/history/:user_id     GET     聊天历史
//! - /api/chat/history/:user_id     DELETE  清空聊天历史
//! - /api/webhooks/facebook         GET     Messenger 验证
//! - /api/webhooks/facebook         POST    Messenger 回调
//! - /api/webhooks/whatsapp         POST    WhatsApp 回调
//!
//! 其余路径返回 404 `{"success": false, "error": "Route not found"}`

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
///
/// 路径存在但方法不匹配时同样返回 404，而不是 405
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::health).fallback(handlers::route_not_found))
        .nest("/api", api_routes())
        .fallback(handlers::route_not_found)
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/products", product_routes())
        .nest("/orders", order_routes())
        .nest("/users", user_routes())
        .nest("/chat", chat_routes())
        .nest("/webhooks", webhook_routes())
}

/// Product 路由
fn product_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::list_products)
                .post(handlers::create_product)
                .fallback(handlers::route_not_found),
        )
        .route(
            "/:id",
            get(handlers::get_product).fallback(handlers::route_not_found),
        )
}

/// Order 路由
fn order_routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/",
        get(handlers::list_orders)
            .post(handlers::create_order)
            .fallback(handlers::route_not_found),
    )
}

/// User 路由
fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/register",
            post(handlers::register_user).fallback(handlers::route_not_found),
        )
        .route(
            "/login",
            post(handlers::login_user).fallback(handlers::route_not_found),
        )
}

/// Chat 路由
fn chat_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            post(handlers::send_chat_message).fallback(handlers::route_not_found),
        )
        .route(
            "/history/:user_id",
            get(handlers::get_chat_history)
                .delete(handlers::clear_chat_history)
                .fallback(handlers::route_not_found),
        )
}

/// Webhook 路由
fn webhook_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/facebook",
            get(handlers::verify_facebook_webhook)
                .post(handlers::facebook_webhook)
                .fallback(handlers::route_not_found),
        )
        .route(
            "/whatsapp",
            post(handlers::whatsapp_webhook).fallback(handlers::route_not_found),
        )
}
