//! # parlor-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AuthResponse, BanUserRequest, ChatMessageItem, ChatMessageResponse, CreateRoomRequest,
    CurrentUserResponse, DashboardResponse, DeletedCountResponse, LoginRequest, LogoutRequest,
    MessagePageResponse, ModeratedRoomResponse, PostMessageRequest, ProfileResponse,
    PurgeMessagesRequest, RefreshTokenRequest, RegisterRequest, RoomDetailResponse, RoomResponse,
    RoomStatsResponse, UpdateProfileRequest, UpdateRoomRequest,
};
pub use services::{
    AuthService, MessageService, ModerationService, RoomService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
