//! Domain entities - core business objects

mod member;
mod message;
mod room;
mod user;

pub use member::RoomMember;
pub use message::Message;
pub use room::Room;
pub use user::User;
