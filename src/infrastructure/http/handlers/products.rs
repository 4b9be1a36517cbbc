//! Product HTTP Handlers
//!
//! 占位实现：固定返回，不读写数据库

use axum::{extract::Path, Json};

use crate::infrastructure::http::dto::{
    ApiResponse, Empty, MessageResponse, ProductDetailResponse, ProductListResponse,
};

/// GET /api/products
pub async fn list_products() -> Json<ApiResponse<ProductListResponse>> {
    Json(ApiResponse::success(ProductListResponse {
        products: Vec::new(),
    }))
}

/// GET /api/products/:id
pub async fn get_product(Path(id): Path<String>) -> Json<ApiResponse<ProductDetailResponse>> {
    tracing::debug!(product_id = %id, "Product lookup");
    Json(ApiResponse::success(ProductDetailResponse { product: Empty {} }))
}

/// POST /api/products（请求体不解析）
pub async fn create_product() -> Json<ApiResponse<MessageResponse>> {
    Json(ApiResponse::success(MessageResponse {
        message: "Product created",
    }))
}
