//! Message service
//!
//! Handles posting messages and paging through room history. Both operations
//! are membership-gated: non-members can neither post nor read.

use parlor_core::entities::Message;
use parlor_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    ChatMessageItem, ChatMessageResponse, MessagePageResponse, MessageWithAuthor,
    PostMessageRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a message to a room
    ///
    /// The response echoes id, author, staff flag, and formatted time so the
    /// client can render the message without a follow-up fetch.
    #[instrument(skip(self, request))]
    pub async fn post_message(
        &self,
        room_id: Snowflake,
        author_id: Snowflake,
        request: PostMessageRequest,
    ) -> ServiceResult<ChatMessageResponse> {
        self.require_room(room_id).await?;

        let content = request.content.trim().to_string();
        Message::validate_content(&content).map_err(ServiceError::from)?;

        // Posting requires a membership row; visiting the room creates one
        if !self.ctx.member_repo().is_member(room_id, author_id).await? {
            return Err(ServiceError::Domain(DomainError::NotRoomMember));
        }

        let message = Message::new(self.ctx.generate_id(), room_id, author_id, content);
        self.ctx.message_repo().create(&message).await?;

        let author = self
            .ctx
            .user_repo()
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", author_id.to_string()))?;

        info!(message_id = %message.id, room_id = %room_id, "Message posted");

        Ok(ChatMessageResponse::from(&MessageWithAuthor {
            message,
            author,
        }))
    }

    /// One page of room history for a member
    ///
    /// The page window is anchored at the newest message (`offset` back from
    /// the end, `limit` wide) and returned oldest-first. `has_more` reports
    /// whether older messages remain beyond the window.
    #[instrument(skip(self))]
    pub async fn list_messages(
        &self,
        room_id: Snowflake,
        requester_id: Snowflake,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<MessagePageResponse> {
        self.require_room(room_id).await?;

        if !self
            .ctx
            .member_repo()
            .is_member(room_id, requester_id)
            .await?
        {
            return Err(ServiceError::Domain(DomainError::NotRoomMember));
        }

        let total = self.ctx.message_repo().count_by_room(room_id).await?;
        let page = self
            .ctx
            .message_repo()
            .find_page(room_id, limit, offset)
            .await?;

        let mut items = Vec::with_capacity(page.len());
        for message in page {
            // Authors always resolve: deleting a user cascades to their messages
            let author = self
                .ctx
                .user_repo()
                .find_by_id(message.author_id)
                .await?
                .ok_or_else(|| ServiceError::internal("Message author not found"))?;

            items.push(ChatMessageItem::from(&MessageWithAuthor { message, author }));
        }

        Ok(MessagePageResponse {
            success: true,
            messages: items,
            has_more: total > offset + limit,
        })
    }

    async fn require_room(&self, room_id: Snowflake) -> ServiceResult<()> {
        self.ctx
            .room_repo()
            .find_by_id(room_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::not_found("Room", room_id.to_string()))
    }
}
