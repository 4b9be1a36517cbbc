//! Chat HTTP Handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::application::{ClearConversation, GetConversation, SendChatMessage};
use crate::infrastructure::http::dto::{
    ApiResponse, ChatRequest, ChatResponse, HistoryResponse, MessageResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 空请求体等同于 `{}`
fn parse_chat_request(body: &[u8]) -> Result<ChatRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ChatRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid chat request: {}", e)))
}

/// POST /api/chat
pub async fn send_chat_message(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ApiResponse<ChatResponse>>, ApiError> {
    let request = parse_chat_request(&body)?;

    let command = SendChatMessage {
        user_id: request.user_id,
        message: request.message,
        language: request.language,
    };

    let result = state.send_chat_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(ChatResponse {
        response: result.reply,
        intent: result.intent,
        params: result.params,
        language: result.language,
        normalized: result.normalized,
    })))
}

/// GET /api/chat/history/:user_id
pub async fn get_chat_history(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<HistoryResponse>>, ApiError> {
    let result = state
        .get_conversation_handler
        .handle(GetConversation { user_id })
        .await?;

    Ok(Json(ApiResponse::success(HistoryResponse {
        user_id: result.user_id,
        history: result.history,
    })))
}

/// DELETE /api/chat/history/:user_id
pub async fn clear_chat_history(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .clear_conversation_handler
        .handle(ClearConversation { user_id })
        .await?;

    Ok(Json(ApiResponse::success(MessageResponse {
        message: "History cleared",
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_body_is_default_request() {
        let request = parse_chat_request(b"  \n").unwrap();
        assert!(request.message.is_empty());
    }

    #[test]
    fn test_malformed_body_is_bad_request() {
        let err = parse_chat_request(b"{not json").unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
