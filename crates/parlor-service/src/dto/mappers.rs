//! Mappers converting domain entities into response DTOs

use parlor_core::{Message, Room, User};

use super::responses::{ChatMessageItem, ChatMessageResponse, CurrentUserResponse, RoomResponse};

/// A message paired with its author, resolved by the service layer
#[derive(Debug)]
pub struct MessageWithAuthor {
    pub message: Message,
    pub author: User,
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            bio: user.bio.clone(),
            is_staff: user.is_staff,
            is_active: user.is_active,
            last_login: user.last_login,
            created_at: user.created_at,
        }
    }
}

impl From<&Room> for RoomResponse {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.to_string(),
            name: room.name.clone(),
            description: room.description.clone(),
            is_private: room.is_private,
            owner_id: room.owner_id.to_string(),
            created_at: room.created_at,
        }
    }
}

impl From<&MessageWithAuthor> for ChatMessageItem {
    fn from(value: &MessageWithAuthor) -> Self {
        Self {
            message_id: value.message.id.into_inner(),
            username: value.author.username.clone(),
            is_admin: value.author.is_staff,
            timestamp: value.message.created_at.format("%H:%M").to_string(),
            message_content: value.message.content.clone(),
        }
    }
}

impl From<&MessageWithAuthor> for ChatMessageResponse {
    fn from(value: &MessageWithAuthor) -> Self {
        let item = ChatMessageItem::from(value);
        Self {
            success: true,
            message_id: item.message_id,
            username: item.username,
            is_admin: item.is_admin,
            timestamp: item.timestamp,
            message_content: item.message_content,
        }
    }
}
