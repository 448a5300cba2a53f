//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("User not found: {0}")]
    UsernameNotFound(String),

    #[error("Room not found: {0}")]
    RoomNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Moderation actions cannot target your own account")]
    SelfAction,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Staff privileges required")]
    StaffRequired,

    #[error("Not the room creator")]
    NotRoomOwner,

    #[error("Not a member of this room")]
    NotRoomMember,

    #[error("Room creator cannot leave, delete the room instead")]
    OwnerCannotLeave,

    #[error("Account is disabled")]
    AccountDisabled,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already taken")]
    UsernameTaken,

    #[error("A room named \"{0}\" already exists")]
    RoomNameTaken(String),

    #[error("Already a member of this room")]
    AlreadyMember,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) | Self::UsernameNotFound(_) => "UNKNOWN_USER",
            Self::RoomNotFound(_) => "UNKNOWN_ROOM",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::SelfAction => "SELF_ACTION",

            // Authorization
            Self::StaffRequired => "STAFF_REQUIRED",
            Self::NotRoomOwner => "NOT_ROOM_CREATOR",
            Self::NotRoomMember => "NOT_ROOM_MEMBER",
            Self::OwnerCannotLeave => "CREATOR_CANNOT_LEAVE",
            Self::AccountDisabled => "ACCOUNT_DISABLED",

            // Conflict
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::RoomNameTaken(_) => "ROOM_NAME_TAKEN",
            Self::AlreadyMember => "ALREADY_MEMBER",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::UsernameNotFound(_) | Self::RoomNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidUsername(_)
                | Self::WeakPassword(_)
                | Self::ContentTooLong { .. }
                | Self::SelfAction
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::StaffRequired
                | Self::NotRoomOwner
                | Self::NotRoomMember
                | Self::OwnerCannotLeave
                | Self::AccountDisabled
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameTaken | Self::RoomNameTaken(_) | Self::AlreadyMember
        )
    }
}
