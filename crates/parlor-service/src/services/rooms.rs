//! Room service
//!
//! Handles room creation, editing, deletion, listing, the implicit
//! join-on-visit membership, and leaving.

use parlor_core::entities::{Room, RoomMember};
use parlor_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CreateRoomRequest, RoomDetailResponse, RoomResponse, RoomStatsResponse, UpdateRoomRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Marker substrings counted in the per-room statistics. A content-tagging
/// convention scanned against message text, not an attachment model.
const STAT_MARKERS: [&str; 5] = ["http", "[media]", "[file]", "[music]", "[voice]"];

/// Room service
pub struct RoomService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RoomService<'a> {
    /// Create a new RoomService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new room; the creator becomes a member in the same transaction
    #[instrument(skip(self, request))]
    pub async fn create_room(
        &self,
        owner_id: Snowflake,
        request: CreateRoomRequest,
    ) -> ServiceResult<RoomResponse> {
        let name = request.name.trim().to_string();
        Room::validate_name(&name).map_err(ServiceError::from)?;

        let description = request
            .description
            .map(|d| d.trim().to_string())
            .unwrap_or_default();

        let mut room = Room::new(self.ctx.generate_id(), name, description, owner_id);
        room.is_private = request.is_private;

        // Duplicate names surface as RoomNameTaken via the unique index
        self.ctx.room_repo().create_with_owner(&room).await?;

        info!(room_id = %room.id, owner_id = %owner_id, "Room created");

        Ok(RoomResponse::from(&room))
    }

    /// Open a room: ensures the visitor's membership (get-or-create) and
    /// returns the detail payload with derived statistics
    #[instrument(skip(self))]
    pub async fn open_room(
        &self,
        room_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<RoomDetailResponse> {
        let room = self.get_room_entity(room_id).await?;

        // Visiting a room is joining it; repeat visits are no-ops
        self.ctx
            .member_repo()
            .ensure(&RoomMember::new(room_id, user_id))
            .await?;

        let stats = self.room_stats(room_id).await?;

        Ok(RoomDetailResponse {
            is_owner: room.is_owned_by(user_id),
            room: RoomResponse::from(&room),
            stats,
        })
    }

    /// Edit name/description/visibility; creator or staff only
    #[instrument(skip(self, request))]
    pub async fn update_room(
        &self,
        room_id: Snowflake,
        actor_id: Snowflake,
        request: UpdateRoomRequest,
    ) -> ServiceResult<RoomResponse> {
        let mut room = self.get_room_entity(room_id).await?;
        self.require_owner_or_staff(&room, actor_id).await?;

        let name = request.name.trim().to_string();
        Room::validate_name(&name).map_err(ServiceError::from)?;

        let description = request
            .description
            .map(|d| d.trim().to_string())
            .unwrap_or_else(|| room.description.clone());

        room.update(name, description);
        if let Some(is_private) = request.is_private {
            room.is_private = is_private;
        }

        self.ctx.room_repo().update(&room).await?;

        info!(room_id = %room_id, actor_id = %actor_id, "Room updated");

        Ok(RoomResponse::from(&room))
    }

    /// Delete a room; creator or staff only. Messages and memberships go
    /// with it. Deleting a missing room is an error, never a silent no-op.
    #[instrument(skip(self))]
    pub async fn delete_room(&self, room_id: Snowflake, actor_id: Snowflake) -> ServiceResult<()> {
        let room = self.get_room_entity(room_id).await?;
        self.require_owner_or_staff(&room, actor_id).await?;

        self.ctx.room_repo().delete(room_id).await?;

        info!(room_id = %room_id, actor_id = %actor_id, "Room deleted");

        Ok(())
    }

    /// Leave a room. The creator must delete the room instead.
    #[instrument(skip(self))]
    pub async fn leave_room(&self, room_id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        let room = self.get_room_entity(room_id).await?;

        if room.is_owned_by(user_id) {
            return Err(ServiceError::Domain(DomainError::OwnerCannotLeave));
        }

        // Reports NotRoomMember when there is no membership row
        self.ctx.member_repo().delete(room_id, user_id).await?;

        info!(room_id = %room_id, user_id = %user_id, "User left room");

        Ok(())
    }

    /// Rooms visible to a viewer: public rooms plus private rooms they belong to
    #[instrument(skip(self))]
    pub async fn list_rooms(&self, viewer: Option<Snowflake>) -> ServiceResult<Vec<RoomResponse>> {
        let rooms = self.ctx.room_repo().list_visible(viewer).await?;
        Ok(rooms.iter().map(RoomResponse::from).collect())
    }

    /// Fetch the room entity or fail with not-found
    pub async fn get_room_entity(&self, room_id: Snowflake) -> ServiceResult<Room> {
        self.ctx
            .room_repo()
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Room", room_id.to_string()))
    }

    /// Derived statistics for a room, recomputed on every read
    async fn room_stats(&self, room_id: Snowflake) -> ServiceResult<RoomStatsResponse> {
        let participant_count = self.ctx.room_repo().member_count(room_id).await?;
        let message_count = self.ctx.message_repo().count_by_room(room_id).await?;

        let mut marker_counts = [0i64; STAT_MARKERS.len()];
        for (count, marker) in marker_counts.iter_mut().zip(STAT_MARKERS) {
            *count = self
                .ctx
                .message_repo()
                .count_containing(room_id, marker)
                .await?;
        }

        let [link_count, media_count, file_count, music_count, voice_count] = marker_counts;

        Ok(RoomStatsResponse {
            participant_count,
            message_count,
            link_count,
            media_count,
            file_count,
            music_count,
            voice_count,
        })
    }

    /// Actor must be the room creator or staff
    async fn require_owner_or_staff(&self, room: &Room, actor_id: Snowflake) -> ServiceResult<()> {
        if room.is_owned_by(actor_id) {
            return Ok(());
        }

        let actor = self
            .ctx
            .user_repo()
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", actor_id.to_string()))?;

        if actor.is_staff {
            Ok(())
        } else {
            Err(ServiceError::Domain(DomainError::NotRoomOwner))
        }
    }
}
