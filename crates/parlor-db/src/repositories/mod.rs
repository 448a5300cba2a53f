//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in parlor-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod member;
mod message;
mod refresh_token;
mod room;
mod user;

pub use member::PgMemberRepository;
pub use message::PgMessageRepository;
pub use refresh_token::PgRefreshTokenRepository;
pub use room::PgRoomRepository;
pub use user::PgUserRepository;
