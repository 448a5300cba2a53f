//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Trim-sensitive checks (empty-after-trim names and messages)
//! are repeated in the services against the trimmed values.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request (optional refresh token to revoke; revokes all when absent)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// Room Requests
// ============================================================================

/// Create room request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, max = 100, message = "Room name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    /// Hide the room from the public listing
    #[serde(default)]
    pub is_private: bool,
}

/// Edit room request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRoomRequest {
    #[validate(length(min = 1, max = 100, message = "Room name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    /// Change listing visibility (unchanged when absent)
    pub is_private: Option<bool>,
}

// ============================================================================
// Message Requests
// ============================================================================

/// Post message request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostMessageRequest {
    #[validate(length(min = 1, max = 1000, message = "Message must be 1-1000 characters"))]
    pub content: String,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Update profile request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New bio, or null/blank to clear it
    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,
}

// ============================================================================
// Moderation Requests
// ============================================================================

/// Ban / unban request, targeting a user by name
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BanUserRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
}

/// Purge-old-messages request
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PurgeMessagesRequest {
    /// Age threshold in days (defaults to 30)
    pub days: Option<i64>,
}
