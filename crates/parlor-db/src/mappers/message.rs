//! MessageModel → Message mapper

use parlor_core::{Message, Snowflake};

use crate::models::MessageModel;

impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Self {
            id: Snowflake::new(model.id),
            room_id: Snowflake::new(model.room_id),
            author_id: Snowflake::new(model.author_id),
            content: model.content,
            created_at: model.created_at,
        }
    }
}
