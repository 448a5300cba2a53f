//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    BanUserRequest, CreateRoomRequest, LoginRequest, LogoutRequest, PostMessageRequest,
    PurgeMessagesRequest, RefreshTokenRequest, RegisterRequest, UpdateProfileRequest,
    UpdateRoomRequest,
};

// Re-export commonly used response types
pub use responses::{
    AuthResponse, ChatMessageItem, ChatMessageResponse, CurrentUserResponse, DashboardResponse,
    DeletedCountResponse, HealthResponse, MessagePageResponse, ModeratedRoomResponse,
    ProfileResponse, ReadinessResponse, RoomDetailResponse, RoomResponse, RoomStatsResponse,
};

// Re-export mapper helpers
pub use mappers::MessageWithAuthor;
