//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Unique suffixes mix a
//! process-start timestamp with a counter so reruns against the same database
//! never collide.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    static BASE: OnceLock<u64> = OnceLock::new();
    let base = BASE.get_or_init(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    base + COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Auth
// ============================================================================

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        Self {
            username: format!("user{}", unique_suffix()),
            password: "testing-pass-1".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserResponse,
}

/// User payload
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub bio: Option<String>,
    pub is_staff: bool,
    pub is_active: bool,
    pub last_login: Option<String>,
    pub created_at: String,
}

/// Refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request
#[derive(Debug, Serialize)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// Rooms
// ============================================================================

/// Create room request
#[derive(Debug, Serialize)]
pub struct CreateRoomRequest {
    pub name: String,
    pub description: Option<String>,
    pub is_private: bool,
}

impl CreateRoomRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("Room {}", unique_suffix()),
            description: Some("a test room".to_string()),
            is_private: false,
        }
    }

    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            is_private: false,
        }
    }
}

/// Edit room request
#[derive(Debug, Serialize)]
pub struct UpdateRoomRequest {
    pub name: String,
    pub description: Option<String>,
    pub is_private: Option<bool>,
}

/// Room response
#[derive(Debug, Deserialize)]
pub struct RoomResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_private: bool,
    pub owner_id: String,
    pub created_at: String,
}

/// Per-room statistics
#[derive(Debug, Deserialize)]
pub struct RoomStatsResponse {
    pub participant_count: i64,
    pub message_count: i64,
    pub link_count: i64,
    pub media_count: i64,
    pub file_count: i64,
    pub music_count: i64,
    pub voice_count: i64,
}

/// Room detail response (room fields flattened at the top level)
#[derive(Debug, Deserialize)]
pub struct RoomDetailResponse {
    pub id: String,
    pub name: String,
    pub is_owner: bool,
    pub stats: RoomStatsResponse,
}

// ============================================================================
// Messages
// ============================================================================

/// Post message request
#[derive(Debug, Serialize)]
pub struct PostMessageRequest {
    pub content: String,
}

impl PostMessageRequest {
    pub fn simple(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

/// Message post echo
#[derive(Debug, Deserialize)]
pub struct ChatMessageResponse {
    pub success: bool,
    pub message_id: i64,
    pub username: String,
    pub is_admin: bool,
    pub timestamp: String,
    pub message_content: String,
}

/// One message in a history page
#[derive(Debug, Deserialize)]
pub struct ChatMessageItem {
    pub message_id: i64,
    pub username: String,
    pub is_admin: bool,
    pub timestamp: String,
    pub message_content: String,
}

/// History page
#[derive(Debug, Deserialize)]
pub struct MessagePageResponse {
    pub success: bool,
    pub messages: Vec<ChatMessageItem>,
    pub has_more: bool,
}

/// Chat-endpoint failure shape
#[derive(Debug, Deserialize)]
pub struct ChatErrorResponse {
    pub success: bool,
    pub error: String,
}

// ============================================================================
// Profile
// ============================================================================

/// Update profile request
#[derive(Debug, Serialize)]
pub struct UpdateProfileRequest {
    pub bio: Option<String>,
}

/// Profile response
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub rooms: Vec<RoomResponse>,
    pub message_count: i64,
}

// ============================================================================
// Moderation
// ============================================================================

/// Ban / unban request
#[derive(Debug, Serialize)]
pub struct BanUserRequest {
    pub username: String,
}

/// Purge request
#[derive(Debug, Serialize)]
pub struct PurgeMessagesRequest {
    pub days: Option<i64>,
}

/// Dashboard response
#[derive(Debug, Deserialize)]
pub struct DashboardResponse {
    pub user_count: i64,
    pub banned_user_count: i64,
    pub room_count: i64,
    pub message_count: i64,
}

/// Bulk delete result
#[derive(Debug, Deserialize)]
pub struct DeletedCountResponse {
    pub deleted_count: u64,
}

/// Staff room listing row
#[derive(Debug, Deserialize)]
pub struct ModeratedRoomResponse {
    pub id: String,
    pub name: String,
    pub owner_username: String,
    pub member_count: i64,
    pub message_count: i64,
}

// ============================================================================
// Errors
// ============================================================================

/// Standard error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
