//! Room membership - the (room, user) join record

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Membership of a user in a room
///
/// The (room_id, user_id) pair is unique. Rows are created lazily the first
/// time a user opens a room, or for the owner when the room is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomMember {
    pub room_id: Snowflake,
    pub user_id: Snowflake,
    pub joined_at: DateTime<Utc>,
}

impl RoomMember {
    /// Create a new membership joined now
    pub fn new(room_id: Snowflake, user_id: Snowflake) -> Self {
        Self {
            room_id,
            user_id,
            joined_at: Utc::now(),
        }
    }
}
