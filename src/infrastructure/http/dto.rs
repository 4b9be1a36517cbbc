//! Data Transfer Objects

use serde::{Deserialize, Deserializer, Serialize};

use crate::application::{ChatMessage, Language};
use crate::domain::conversation::{Intent, IntentParams};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式: `{"success": true, ...payload}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// 空数据响应
#[derive(Debug, Serialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// 成功但无数据
    pub fn ok() -> Self {
        Self::success(Empty {})
    }
}

/// 固定确认消息
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ============================================================================
// Product DTOs
// ============================================================================

/// 商品列表（占位，元素保持为任意 JSON）
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct ProductDetailResponse {
    pub product: Empty,
}

// ============================================================================
// Order DTOs
// ============================================================================

/// 没有订单模型，列表元素保持为任意 JSON
#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    pub orders: Vec<serde_json::Value>,
}

// ============================================================================
// User DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: &'static str,
}

// ============================================================================
// Chat DTOs
// ============================================================================

/// 缺省字段和显式 `null` 都取默认值
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: Language,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub intent: Option<Intent>,
    pub params: IntentParams,
    pub language: Language,
    pub normalized: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub user_id: String,
    pub history: Vec<ChatMessage>,
}
