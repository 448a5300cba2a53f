//! Staff moderation handlers
//!
//! The staff capability is verified inside every service call against the
//! acting user's row, not by a routing-level gate.

use axum::{
    extract::{Path, State},
    Json,
};
use parlor_core::Snowflake;
use parlor_service::{
    BanUserRequest, CurrentUserResponse, DashboardResponse, DeletedCountResponse,
    ModeratedRoomResponse, ModerationService, PurgeMessagesRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, NoContent};
use crate::state::AppState;

/// Aggregate totals
///
/// GET /admin/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<DashboardResponse>> {
    let service = ModerationService::new(state.service_context());
    let response = service.dashboard(auth.user_id).await?;
    Ok(Json(response))
}

/// Every user account
///
/// GET /admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<CurrentUserResponse>>> {
    let service = ModerationService::new(state.service_context());
    let response = service.list_users(auth.user_id).await?;
    Ok(Json(response))
}

/// Every room with owner and usage counts
///
/// GET /admin/rooms
pub async fn list_rooms(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ModeratedRoomResponse>>> {
    let service = ModerationService::new(state.service_context());
    let response = service.list_rooms(auth.user_id).await?;
    Ok(Json(response))
}

/// Ban a user by username
///
/// POST /admin/ban_user
pub async fn ban_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<BanUserRequest>,
) -> ApiResult<NoContent> {
    let service = ModerationService::new(state.service_context());
    service.ban_user(auth.user_id, &request.username).await?;
    Ok(NoContent)
}

/// Unban a user by username
///
/// POST /admin/unban_user
pub async fn unban_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<BanUserRequest>,
) -> ApiResult<NoContent> {
    let service = ModerationService::new(state.service_context());
    service.unban_user(auth.user_id, &request.username).await?;
    Ok(NoContent)
}

/// Bulk-delete messages older than the threshold (default 30 days)
///
/// POST /admin/clear_messages
pub async fn clear_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Option<Json<PurgeMessagesRequest>>,
) -> ApiResult<Json<DeletedCountResponse>> {
    let days = body.and_then(|b| b.0.days);

    let service = ModerationService::new(state.service_context());
    let response = service.purge_old_messages(auth.user_id, days).await?;
    Ok(Json(response))
}

/// Hard-delete a user account (cascades to their rooms and messages)
///
/// POST /admin/users/{user_id}/delete
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<String>,
) -> ApiResult<NoContent> {
    let user_id: Snowflake = user_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user_id format"))?;

    let service = ModerationService::new(state.service_context());
    service.delete_user(auth.user_id, user_id).await?;
    Ok(NoContent)
}
