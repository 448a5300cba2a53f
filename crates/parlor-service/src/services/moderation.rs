//! Moderation service
//!
//! Staff-only operations: ban/unban, purge old messages, delete users, and
//! the read-only dashboard and listing views. The staff capability is checked
//! on the actor inside every operation rather than by a routing-level gate.

use chrono::{Duration, Utc};
use parlor_core::entities::User;
use parlor_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CurrentUserResponse, DashboardResponse, DeletedCountResponse, ModeratedRoomResponse,
    RoomResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Default age threshold for the message purge, in days
const DEFAULT_PURGE_DAYS: i64 = 30;

/// Moderation service
pub struct ModerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ModerationService<'a> {
    /// Create a new ModerationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Ban a user by username (sets `is_active = false`)
    #[instrument(skip(self))]
    pub async fn ban_user(&self, actor_id: Snowflake, username: &str) -> ServiceResult<()> {
        let actor = self.require_staff(actor_id).await?;

        let target = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                ServiceError::Domain(DomainError::UsernameNotFound(username.to_string()))
            })?;

        if target.id == actor.id {
            return Err(ServiceError::Domain(DomainError::SelfAction));
        }

        self.ctx.user_repo().set_active(target.id, false).await?;

        info!(target_id = %target.id, actor_id = %actor_id, "User banned");

        Ok(())
    }

    /// Unban a user by username (sets `is_active = true`; no self-check)
    #[instrument(skip(self))]
    pub async fn unban_user(&self, actor_id: Snowflake, username: &str) -> ServiceResult<()> {
        self.require_staff(actor_id).await?;

        let target = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                ServiceError::Domain(DomainError::UsernameNotFound(username.to_string()))
            })?;

        self.ctx.user_repo().set_active(target.id, true).await?;

        info!(target_id = %target.id, actor_id = %actor_id, "User unbanned");

        Ok(())
    }

    /// Bulk-delete messages older than the threshold, returning the count
    ///
    /// No soft delete and no audit trail of what was purged; the rows are
    /// simply gone. Running it again with nothing old left deletes zero.
    #[instrument(skip(self))]
    pub async fn purge_old_messages(
        &self,
        actor_id: Snowflake,
        older_than_days: Option<i64>,
    ) -> ServiceResult<DeletedCountResponse> {
        self.require_staff(actor_id).await?;

        let days = older_than_days.unwrap_or(DEFAULT_PURGE_DAYS);
        if days < 0 {
            return Err(ServiceError::validation("days must not be negative"));
        }

        let cutoff = Utc::now() - Duration::days(days);
        let deleted_count = self.ctx.message_repo().delete_older_than(cutoff).await?;

        info!(actor_id = %actor_id, days, deleted_count, "Old messages purged");

        Ok(DeletedCountResponse { deleted_count })
    }

    /// Hard-delete a user account
    ///
    /// Cascades to the target's rooms (with their messages and memberships),
    /// messages, memberships, and refresh tokens.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, actor_id: Snowflake, target_id: Snowflake) -> ServiceResult<()> {
        self.require_staff(actor_id).await?;

        if target_id == actor_id {
            return Err(ServiceError::Domain(DomainError::SelfAction));
        }

        self.ctx.user_repo().delete(target_id).await?;

        info!(target_id = %target_id, actor_id = %actor_id, "User deleted");

        Ok(())
    }

    /// Every user account, newest first
    #[instrument(skip(self))]
    pub async fn list_users(&self, actor_id: Snowflake) -> ServiceResult<Vec<CurrentUserResponse>> {
        self.require_staff(actor_id).await?;

        let users = self.ctx.user_repo().list_all().await?;
        Ok(users.iter().map(CurrentUserResponse::from).collect())
    }

    /// Every room with owner name and usage counts, newest first
    #[instrument(skip(self))]
    pub async fn list_rooms(&self, actor_id: Snowflake) -> ServiceResult<Vec<ModeratedRoomResponse>> {
        self.require_staff(actor_id).await?;

        let rooms = self.ctx.room_repo().list_all().await?;

        let mut responses = Vec::with_capacity(rooms.len());
        for room in rooms {
            let owner_username = self
                .ctx
                .user_repo()
                .find_by_id(room.owner_id)
                .await?
                .map_or_else(|| "<deleted>".to_string(), |u| u.username);

            let member_count = self.ctx.room_repo().member_count(room.id).await?;
            let message_count = self.ctx.message_repo().count_by_room(room.id).await?;

            responses.push(ModeratedRoomResponse {
                room: RoomResponse::from(&room),
                owner_username,
                member_count,
                message_count,
            });
        }

        Ok(responses)
    }

    /// Aggregate totals for the staff dashboard
    #[instrument(skip(self))]
    pub async fn dashboard(&self, actor_id: Snowflake) -> ServiceResult<DashboardResponse> {
        self.require_staff(actor_id).await?;

        Ok(DashboardResponse {
            user_count: self.ctx.user_repo().count().await?,
            banned_user_count: self.ctx.user_repo().count_banned().await?,
            room_count: self.ctx.room_repo().count().await?,
            message_count: self.ctx.message_repo().count().await?,
        })
    }

    /// Load the actor and verify the staff capability
    async fn require_staff(&self, actor_id: Snowflake) -> ServiceResult<User> {
        let actor = self
            .ctx
            .user_repo()
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", actor_id.to_string()))?;

        if !actor.is_staff {
            return Err(ServiceError::Domain(DomainError::StaffRequired));
        }

        Ok(actor)
    }
}
