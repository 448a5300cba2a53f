//! User entity - represents a registered account

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// User account
///
/// `is_active` doubles as the ban flag: staff set it to false to ban a user
/// and back to true to unban. `is_staff` grants access to the moderation
/// operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub bio: Option<String>,
    pub is_staff: bool,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Minimum username length
    pub const MIN_USERNAME: usize = 2;
    /// Maximum username length
    pub const MAX_USERNAME: usize = 32;
    /// Maximum bio length
    pub const MAX_BIO: usize = 500;

    /// Create a new active, non-staff User
    pub fn new(id: Snowflake, username: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            bio: None,
            is_staff: false,
            is_active: true,
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the account is banned
    #[inline]
    pub fn is_banned(&self) -> bool {
        !self.is_active
    }

    /// Update the bio, clearing it when the new value is empty
    pub fn set_bio(&mut self, bio: Option<String>) {
        self.bio = bio.filter(|b| !b.trim().is_empty());
        self.updated_at = Utc::now();
    }

    /// Validate a username: trimmed, within length bounds, no whitespace
    ///
    /// # Errors
    /// Returns `DomainError::InvalidUsername` describing the first violation
    pub fn validate_username(username: &str) -> Result<(), DomainError> {
        let trimmed = username.trim();
        if trimmed.len() < Self::MIN_USERNAME {
            return Err(DomainError::InvalidUsername(format!(
                "must be at least {} characters",
                Self::MIN_USERNAME
            )));
        }
        if trimmed.len() > Self::MAX_USERNAME {
            return Err(DomainError::InvalidUsername(format!(
                "must be at most {} characters",
                Self::MAX_USERNAME
            )));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidUsername(
                "must not contain whitespace".to_string(),
            ));
        }
        Ok(())
    }
}
