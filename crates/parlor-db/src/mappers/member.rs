//! RoomMemberModel → RoomMember mapper

use parlor_core::{RoomMember, Snowflake};

use crate::models::RoomMemberModel;

impl From<RoomMemberModel> for RoomMember {
    fn from(model: RoomMemberModel) -> Self {
        Self {
            room_id: Snowflake::new(model.room_id),
            user_id: Snowflake::new(model.user_id),
            joined_at: model.joined_at,
        }
    }
}
