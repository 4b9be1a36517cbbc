//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// 默认的 500 错误信息
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::NotFound(msg) => {
                tracing::debug!(error = %msg, "Not found");
                msg
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                msg
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                if msg.is_empty() {
                    INTERNAL_ERROR_MESSAGE.to_string()
                } else {
                    msg
                }
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<crate::application::ApplicationError> for ApiError {
    fn from(e: crate::application::ApplicationError) -> Self {
        match e {
            crate::application::ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_shape() {
        let response = ApiError::NotFound("Route not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "success": false, "error": "Route not found" })
        );
    }

    #[tokio::test]
    async fn test_empty_internal_message_gets_default() {
        let response = ApiError::Internal(String::new()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: ApiError =
            crate::application::ApplicationError::validation("user_id too long").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
