//! Database models - SQLx-compatible structs for PostgreSQL tables

mod member;
mod message;
mod refresh_token;
mod room;
mod user;

pub use member::RoomMemberModel;
pub use message::MessageModel;
pub use refresh_token::RefreshTokenModel;
pub use room::RoomModel;
pub use user::UserModel;
