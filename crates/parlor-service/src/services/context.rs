//! Service context - dependency container for services
//!
//! Holds the repositories and shared services every business service needs.

use std::sync::Arc;

use parlor_common::JwtService;
use parlor_core::traits::{
    MemberRepository, MessageRepository, RefreshTokenRepository, RoomRepository, UserRepository,
};
use parlor_core::SnowflakeGenerator;
use parlor_db::PgPool;

/// Service context containing all dependencies
///
/// The main dependency container passed to all services. Provides access to:
/// - Database repositories
/// - JWT service for authentication
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (kept for readiness probes)
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    room_repo: Arc<dyn RoomRepository>,
    member_repo: Arc<dyn MemberRepository>,
    message_repo: Arc<dyn MessageRepository>,
    refresh_token_repo: Arc<dyn RefreshTokenRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        room_repo: Arc<dyn RoomRepository>,
        member_repo: Arc<dyn MemberRepository>,
        message_repo: Arc<dyn MessageRepository>,
        refresh_token_repo: Arc<dyn RefreshTokenRepository>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            room_repo,
            member_repo,
            message_repo,
            refresh_token_repo,
            jwt_service,
            snowflake_generator,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the room repository
    pub fn room_repo(&self) -> &dyn RoomRepository {
        self.room_repo.as_ref()
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the refresh token repository
    pub fn refresh_token_repo(&self) -> &dyn RefreshTokenRepository {
        self.refresh_token_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> parlor_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    room_repo: Option<Arc<dyn RoomRepository>>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    refresh_token_repo: Option<Arc<dyn RefreshTokenRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn room_repo(mut self, repo: Arc<dyn RoomRepository>) -> Self {
        self.room_repo = Some(repo);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn refresh_token_repo(mut self, repo: Arc<dyn RefreshTokenRepository>) -> Self {
        self.refresh_token_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.room_repo
                .ok_or_else(|| ServiceError::validation("room_repo is required"))?,
            self.member_repo
                .ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            self.message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            self.refresh_token_repo
                .ok_or_else(|| ServiceError::validation("refresh_token_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}
