//! Chat message handlers
//!
//! These two endpoints speak the legacy chat-client contract: every response,
//! success or failure, is a JSON object with a `success` flag, and failures
//! carry a plain `error` string instead of the standard error envelope.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use parlor_core::Snowflake;
use parlor_service::{
    ChatMessageResponse, MessagePageResponse, MessageService, PostMessageRequest, ServiceError,
};
use serde::Serialize;
use validator::Validate;

use crate::extractors::{AuthUser, Pagination};
use crate::state::AppState;

/// Failure body for the chat endpoints: `{"success": false, "error": "..."}`
#[derive(Debug, Serialize)]
struct ChatErrorBody {
    success: bool,
    error: String,
}

/// Error wrapper that renders the chat-flavored failure shape
pub struct ChatApiError {
    status: StatusCode,
    message: String,
}

impl From<ServiceError> for ChatApiError {
    fn from(err: ServiceError) -> Self {
        Self {
            status: StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            message: err.to_string(),
        }
    }
}

impl ChatApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ChatApiError {
    fn into_response(self) -> Response {
        let body = ChatErrorBody {
            success: false,
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

fn parse_room_id(raw: &str) -> Result<Snowflake, ChatApiError> {
    raw.parse()
        .map_err(|_| ChatApiError::bad_request("Invalid room_id format"))
}

/// Post a message; the echo carries everything needed to render it
///
/// POST /room/{room_id}/send_message
pub async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(room_id): Path<String>,
    Json(request): Json<PostMessageRequest>,
) -> Result<Json<ChatMessageResponse>, ChatApiError> {
    let room_id = parse_room_id(&room_id)?;

    request
        .validate()
        .map_err(|e| ChatApiError::bad_request(e.to_string()))?;

    let service = MessageService::new(state.service_context());
    let response = service.post_message(room_id, auth.user_id, request).await?;
    Ok(Json(response))
}

/// One page of room history, oldest first
///
/// GET /room/{room_id}/messages?limit=&offset=
pub async fn get_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(room_id): Path<String>,
    pagination: Pagination,
) -> Result<Json<MessagePageResponse>, ChatApiError> {
    let room_id = parse_room_id(&room_id)?;

    let service = MessageService::new(state.service_context());
    let response = service
        .list_messages(room_id, auth.user_id, pagination.limit, pagination.offset)
        .await?;
    Ok(Json(response))
}
