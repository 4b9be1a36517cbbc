//! Health Handler

use axum::Json;
use serde::Serialize;

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub features: &'static [&'static str],
}

const FEATURES: &[&str] = &[
    "REST API",
    "SQLite Integration",
    "Facebook Messenger",
    "WhatsApp Business",
    "Egyptian Arabic Chatbot",
];

/// GET / - 服务状态
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "BWW Store API",
        version: env!("CARGO_PKG_VERSION"),
        features: FEATURES,
    })
}
