//! Room handlers
//!
//! Endpoints for room listing, creation, detail (which implicitly joins the
//! visitor), editing, deletion, and leaving.

use axum::{
    extract::{Path, State},
    Json,
};
use parlor_core::Snowflake;
use parlor_service::{
    CreateRoomRequest, RoomDetailResponse, RoomResponse, RoomService, UpdateRoomRequest,
};

use crate::extractors::{AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Parse a room ID path segment
fn parse_room_id(raw: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid room_id format"))
}

/// Landing page: rooms visible to the (possibly anonymous) viewer
///
/// GET /
pub async fn home(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
) -> ApiResult<Json<Vec<RoomResponse>>> {
    let service = RoomService::new(state.service_context());
    let rooms = service
        .list_rooms(auth.0.map(|user| user.user_id))
        .await?;
    Ok(Json(rooms))
}

/// Rooms visible to the authenticated user
///
/// GET /rooms
pub async fn list_rooms(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<RoomResponse>>> {
    let service = RoomService::new(state.service_context());
    let rooms = service.list_rooms(Some(auth.user_id)).await?;
    Ok(Json(rooms))
}

/// Create a room; the creator becomes a member automatically
///
/// POST /create-room
pub async fn create_room(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateRoomRequest>,
) -> ApiResult<Created<Json<RoomResponse>>> {
    let service = RoomService::new(state.service_context());
    let response = service.create_room(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Room detail; visiting joins the room (get-or-create membership)
///
/// GET /room/{room_id}
pub async fn room_detail(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(room_id): Path<String>,
) -> ApiResult<Json<RoomDetailResponse>> {
    let room_id = parse_room_id(&room_id)?;

    let service = RoomService::new(state.service_context());
    let response = service.open_room(room_id, auth.user_id).await?;
    Ok(Json(response))
}

/// Edit a room (creator or staff)
///
/// POST /room/{room_id}/edit
pub async fn edit_room(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(room_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateRoomRequest>,
) -> ApiResult<Json<RoomResponse>> {
    let room_id = parse_room_id(&room_id)?;

    let service = RoomService::new(state.service_context());
    let response = service.update_room(room_id, auth.user_id, request).await?;
    Ok(Json(response))
}

/// Delete a room (creator or staff); messages and memberships cascade
///
/// POST /room/{room_id}/delete
pub async fn delete_room(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(room_id): Path<String>,
) -> ApiResult<NoContent> {
    let room_id = parse_room_id(&room_id)?;

    let service = RoomService::new(state.service_context());
    service.delete_room(room_id, auth.user_id).await?;
    Ok(NoContent)
}

/// Leave a room (forbidden for the creator)
///
/// POST /room/{room_id}/leave
pub async fn leave_room(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(room_id): Path<String>,
) -> ApiResult<NoContent> {
    let room_id = parse_room_id(&room_id)?;

    let service = RoomService::new(state.service_context());
    service.leave_room(room_id, auth.user_id).await?;
    Ok(NoContent)
}
