//! User HTTP Handlers
//!
//! 占位实现：不校验凭据，登录返回固定 token

use axum::Json;

use crate::infrastructure::http::dto::{ApiResponse, LoginResponse, MessageResponse};

/// 登录返回的占位 token
pub const PLACEHOLDER_TOKEN: &str = "sample-jwt-token";

/// POST /api/users/register
pub async fn register_user() -> Json<ApiResponse<MessageResponse>> {
    Json(ApiResponse::success(MessageResponse {
        message: "User registered",
    }))
}

/// POST /api/users/login
pub async fn login_user() -> Json<ApiResponse<LoginResponse>> {
    Json(ApiResponse::success(LoginResponse {
        token: PLACEHOLDER_TOKEN,
    }))
}
