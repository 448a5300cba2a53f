//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Snowflake IDs are
//! serialized as strings for JavaScript compatibility, with one exception:
//! the chat-message payloads mirror the legacy client contract, where
//! `message_id` is a plain integer and timestamps are pre-formatted `HH:MM`
//! strings.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Authenticated user payload (also the per-row shape of the staff user list)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub is_staff: bool,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Profile page payload: the user plus their joined rooms and message total
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: CurrentUserResponse,
    pub rooms: Vec<RoomResponse>,
    pub message_count: i64,
}

// ============================================================================
// Room Responses
// ============================================================================

/// Basic room response
#[derive(Debug, Clone, Serialize)]
pub struct RoomResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_private: bool,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
}

/// Derived per-room statistics, recomputed on every read
#[derive(Debug, Clone, Serialize)]
pub struct RoomStatsResponse {
    pub participant_count: i64,
    pub message_count: i64,
    pub link_count: i64,
    pub media_count: i64,
    pub file_count: i64,
    pub music_count: i64,
    pub voice_count: i64,
}

/// Room detail page payload
#[derive(Debug, Serialize)]
pub struct RoomDetailResponse {
    #[serde(flatten)]
    pub room: RoomResponse,
    pub is_owner: bool,
    pub stats: RoomStatsResponse,
}

/// Staff room listing row: room plus owner name and usage counts
#[derive(Debug, Serialize)]
pub struct ModeratedRoomResponse {
    #[serde(flatten)]
    pub room: RoomResponse,
    pub owner_username: String,
    pub member_count: i64,
    pub message_count: i64,
}

// ============================================================================
// Chat Message Responses (legacy client contract)
// ============================================================================

/// Echo returned after posting a message
#[derive(Debug, Serialize)]
pub struct ChatMessageResponse {
    pub success: bool,
    pub message_id: i64,
    pub username: String,
    pub is_admin: bool,
    /// Formatted as HH:MM
    pub timestamp: String,
    pub message_content: String,
}

/// One rendered message in a history page
#[derive(Debug, Serialize)]
pub struct ChatMessageItem {
    pub message_id: i64,
    pub username: String,
    pub is_admin: bool,
    /// Formatted as HH:MM
    pub timestamp: String,
    pub message_content: String,
}

/// One page of room history, oldest first
#[derive(Debug, Serialize)]
pub struct MessagePageResponse {
    pub success: bool,
    pub messages: Vec<ChatMessageItem>,
    pub has_more: bool,
}

// ============================================================================
// Moderation Responses
// ============================================================================

/// Staff dashboard totals
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user_count: i64,
    pub banned_user_count: i64,
    pub room_count: i64,
    pub message_count: i64,
}

/// Result of a bulk delete
#[derive(Debug, Serialize)]
pub struct DeletedCountResponse {
    pub deleted_count: u64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Readiness payload (includes the database probe result)
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}
