//! Business services
//!
//! Each service owns one slice of the domain and borrows the shared
//! `ServiceContext` for its dependencies.

pub mod auth;
pub mod context;
pub mod error;
pub mod messages;
pub mod moderation;
pub mod rooms;
pub mod users;

pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use messages::MessageService;
pub use moderation::ModerationService;
pub use rooms::RoomService;
pub use users::UserService;
