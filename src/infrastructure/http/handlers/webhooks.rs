//! Messaging Webhook Handlers
//!
//! Facebook Messenger / WhatsApp 回调，只确认接收，不解析负载

use axum::{body::Bytes, Json};

use crate::infrastructure::http::dto::{ApiResponse, Empty};

/// GET /api/webhooks/facebook - 验证
pub async fn verify_facebook_webhook() -> &'static str {
    "OK"
}

/// POST /api/webhooks/facebook
pub async fn facebook_webhook(body: Bytes) -> Json<ApiResponse<Empty>> {
    tracing::debug!(provider = "facebook", bytes = body.len(), "Webhook received");
    Json(ApiResponse::ok())
}

/// POST /api/webhooks/whatsapp
pub async fn whatsapp_webhook(body: Bytes) -> Json<ApiResponse<Empty>> {
    tracing::debug!(provider = "whatsapp", bytes = body.len(), "Webhook received");
    Json(ApiResponse::ok())
}
