//! # parlor-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ model mappers
//! - Repository implementations
//!
//! Uniqueness (usernames, room names, membership pairs) and cascade deletion
//! are enforced by the schema; integrity violations are translated into the
//! typed conflict errors the domain layer expects.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgMemberRepository, PgMessageRepository, PgRefreshTokenRepository, PgRoomRepository,
    PgUserRepository,
};
