//! RoomModel → Room mapper

use parlor_core::{Room, Snowflake};

use crate::models::RoomModel;

impl From<RoomModel> for Room {
    fn from(model: RoomModel) -> Self {
        Self {
            id: Snowflake::new(model.id),
            name: model.name,
            description: model.description,
            is_private: model.is_private,
            owner_id: Snowflake::new(model.owner_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
