//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. All concurrency correctness (uniqueness,
//! cascade deletion) is delegated to the store's constraints; implementations
//! translate integrity violations into typed conflict errors.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Message, Room, RoomMember, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Create a new user; unique violation maps to `UsernameTaken`
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update mutable profile fields (bio)
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Stamp `last_login` with the current time
    async fn record_login(&self, id: Snowflake) -> RepoResult<()>;

    /// Set the ban flag (`is_active = !banned`)
    async fn set_active(&self, id: Snowflake, active: bool) -> RepoResult<()>;

    /// Hard-delete a user; cascades to owned rooms, memberships, messages
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// List every user, newest first (moderation view; dataset is small)
    async fn list_all(&self) -> RepoResult<Vec<User>>;

    /// Total number of users
    async fn count(&self) -> RepoResult<i64>;

    /// Number of banned users
    async fn count_banned(&self) -> RepoResult<i64>;
}

// ============================================================================
// Room Repository
// ============================================================================

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Find room by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Room>>;

    /// Insert the room and the owner's membership as one transaction;
    /// unique violation on the name maps to `RoomNameTaken`
    async fn create_with_owner(&self, room: &Room) -> RepoResult<()>;

    /// Update name/description/visibility in place;
    /// unique violation on the name maps to `RoomNameTaken`
    async fn update(&self, room: &Room) -> RepoResult<()>;

    /// Delete the room; messages and memberships go with it.
    /// Returns `RoomNotFound` when no row was deleted.
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Rooms visible to a viewer: public rooms, plus private rooms the
    /// viewer belongs to (anonymous viewers see public rooms only)
    async fn list_visible(&self, viewer: Option<Snowflake>) -> RepoResult<Vec<Room>>;

    /// Every room, newest first (moderation view)
    async fn list_all(&self) -> RepoResult<Vec<Room>>;

    /// Rooms a user is a member of
    async fn find_by_member(&self, user_id: Snowflake) -> RepoResult<Vec<Room>>;

    /// Number of members in a room
    async fn member_count(&self, room_id: Snowflake) -> RepoResult<i64>;

    /// Total number of rooms
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Get-or-create semantics: inserting an existing membership is a no-op
    async fn ensure(&self, member: &RoomMember) -> RepoResult<()>;

    /// Check if user is a member of the room
    async fn is_member(&self, room_id: Snowflake, user_id: Snowflake) -> RepoResult<bool>;

    /// Remove a membership. Returns `NotRoomMember` when no row was deleted.
    async fn delete(&self, room_id: Snowflake, user_id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Insert a new message
    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Fetch one page of a room's history: the window `offset` back from the
    /// newest message, `limit` wide, returned in chronological
    /// (oldest-to-newest) order
    async fn find_page(&self, room_id: Snowflake, limit: i64, offset: i64)
        -> RepoResult<Vec<Message>>;

    /// Total messages in a room
    async fn count_by_room(&self, room_id: Snowflake) -> RepoResult<i64>;

    /// Messages in a room whose content contains the given substring
    async fn count_containing(&self, room_id: Snowflake, needle: &str) -> RepoResult<i64>;

    /// Messages authored by a user, across all rooms
    async fn count_by_author(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// Bulk-delete messages older than the cutoff; returns the deleted count
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> RepoResult<u64>;

    /// Total messages across all rooms
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Refresh Token Repository
// ============================================================================

/// Server-side session persistence for refresh tokens.
///
/// Tokens are stored verbatim and looked up by value; revocation and expiry
/// are row-level state, so logout takes effect immediately.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Persist a freshly issued refresh token
    async fn store(
        &self,
        user_id: Snowflake,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<()>;

    /// Resolve a token to its user, if the token is unrevoked and unexpired
    async fn find_user(&self, token: &str) -> RepoResult<Option<Snowflake>>;

    /// Revoke a single token (no error if it is unknown)
    async fn revoke(&self, token: &str) -> RepoResult<()>;

    /// Revoke every token belonging to a user
    async fn revoke_all_for_user(&self, user_id: Snowflake) -> RepoResult<()>;
}
