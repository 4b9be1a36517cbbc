//! Order HTTP Handlers
//!
//! 占位实现：没有订单模型

use axum::Json;

use crate::infrastructure::http::dto::{ApiResponse, MessageResponse, OrderListResponse};

/// GET /api/orders
pub async fn list_orders() -> Json<ApiResponse<OrderListResponse>> {
    Json(ApiResponse::success(OrderListResponse { orders: Vec::new() }))
}

/// POST /api/orders（请求体不解析）
pub async fn create_order() -> Json<ApiResponse<MessageResponse>> {
    Json(ApiResponse::success(MessageResponse {
        message: "Order created",
    }))
}
