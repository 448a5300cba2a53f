//! Room entity - a chat room owned by the user who created it

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Chat room
///
/// Names are unique across the store (case-sensitive exact match). The owner
/// is always a member and cannot leave; deleting the room is the only way
/// out for them. `is_private` hides the room from the public listing but
/// does not change join semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: Snowflake,
    pub name: String,
    pub description: String,
    pub is_private: bool,
    pub owner_id: Snowflake,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Maximum room name length
    pub const MAX_NAME: usize = 100;

    /// Create a new public Room
    pub fn new(id: Snowflake, name: String, description: String, owner_id: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description,
            is_private: false,
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the given user owns this room
    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.owner_id == user_id
    }

    /// Rename the room and update the description
    pub fn update(&mut self, name: String, description: String) {
        self.name = name;
        self.description = description;
        self.updated_at = Utc::now();
    }

    /// Validate a trimmed room name: non-empty, at most `MAX_NAME` chars
    ///
    /// # Errors
    /// Returns a validation error when the name is empty or too long
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.is_empty() {
            return Err(DomainError::ValidationError(
                "room name must not be empty".to_string(),
            ));
        }
        if name.chars().count() > Self::MAX_NAME {
            return Err(DomainError::ContentTooLong { max: Self::MAX_NAME });
        }
        Ok(())
    }
}
