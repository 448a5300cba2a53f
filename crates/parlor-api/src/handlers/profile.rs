//! Profile handlers
//!
//! Endpoints for the authenticated user's own profile.

use axum::{extract::State, Json};
use parlor_service::{CurrentUserResponse, ProfileResponse, UpdateProfileRequest, UserService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Current user's profile with joined rooms and message count
///
/// GET /profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.profile(auth.user_id).await?;
    Ok(Json(response))
}

/// Update the current user's bio
///
/// PATCH /profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(auth.user_id, request).await?;
    Ok(Json(response))
}
