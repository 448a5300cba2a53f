//! User service
//!
//! Profile reads and updates for the authenticated user.

use parlor_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CurrentUserResponse, ProfileResponse, RoomResponse, UpdateProfileRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Profile payload: the user, the rooms they belong to, and their
    /// all-time message count (derived, never stored)
    #[instrument(skip(self))]
    pub async fn profile(&self, user_id: Snowflake) -> ServiceResult<ProfileResponse> {
        let user = self.get_user(user_id).await?;

        let rooms = self.ctx.room_repo().find_by_member(user_id).await?;
        let message_count = self.ctx.message_repo().count_by_author(user_id).await?;

        Ok(ProfileResponse {
            user: CurrentUserResponse::from(&user),
            rooms: rooms.iter().map(RoomResponse::from).collect(),
            message_count,
        })
    }

    /// Update the bio
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Snowflake,
        request: UpdateProfileRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        let mut user = self.get_user(user_id).await?;

        user.set_bio(request.bio);
        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user_id, "Profile updated");

        Ok(CurrentUserResponse::from(&user))
    }

    async fn get_user(&self, user_id: Snowflake) -> ServiceResult<parlor_core::User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }
}
