//! Repository traits (ports)

mod repositories;

pub use repositories::{
    MemberRepository, MessageRepository, RefreshTokenRepository, RepoResult, RoomRepository,
    UserRepository,
};
