//! Message entity - a chat message posted in a room

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Chat message
///
/// Immutable once created: there is no author-side edit or delete. The only
/// deletion paths are the staff purge-by-age and room deletion cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Snowflake,
    pub room_id: Snowflake,
    pub author_id: Snowflake,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Maximum content length in characters
    pub const MAX_CONTENT: usize = 1000;

    /// Create a new Message timestamped now
    pub fn new(id: Snowflake, room_id: Snowflake, author_id: Snowflake, content: String) -> Self {
        Self {
            id,
            room_id,
            author_id,
            content,
            created_at: Utc::now(),
        }
    }

    /// Get a truncated preview of the content
    pub fn preview(&self, max_len: usize) -> &str {
        if self.content.len() <= max_len {
            &self.content
        } else {
            let mut end = max_len;
            while !self.content.is_char_boundary(end) && end > 0 {
                end -= 1;
            }
            &self.content[..end]
        }
    }

    /// Validate trimmed message content: non-empty, at most `MAX_CONTENT` chars
    ///
    /// # Errors
    /// Returns a validation error when the content is blank or too long
    pub fn validate_content(content: &str) -> Result<(), DomainError> {
        if content.is_empty() {
            return Err(DomainError::ValidationError(
                "message must not be empty".to_string(),
            ));
        }
        if content.chars().count() > Self::MAX_CONTENT {
            return Err(DomainError::ContentTooLong {
                max: Self::MAX_CONTENT,
            });
        }
        Ok(())
    }
}
