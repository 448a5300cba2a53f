//! Authentication service
//!
//! Handles user registration, login, token refresh, and logout.

use parlor_common::auth::{hash_password, validate_password_strength, verify_password};
use parlor_common::AppError;
use parlor_core::entities::User;
use parlor_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, CurrentUserResponse, LoginRequest, RefreshTokenRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        let username = request.username.trim().to_string();
        User::validate_username(&username).map_err(ServiceError::from)?;
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user_id = self.ctx.generate_id();
        let user = User::new(user_id, username);

        // The unique index on username resolves concurrent registrations;
        // the loser comes back as UsernameTaken
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user_id, "User registered successfully");

        let response = self.issue_tokens(&user).await?;
        Ok(response)
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let username = request.username.trim();

        let user = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                warn!(username, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        // Banned accounts keep their credentials but may not sign in
        if user.is_banned() {
            warn!(user_id = %user.id, "Login rejected: account disabled");
            return Err(ServiceError::Domain(DomainError::AccountDisabled));
        }

        self.ctx.user_repo().record_login(user.id).await?;

        info!(user_id = %user.id, "User logged in successfully");

        self.issue_tokens(&user).await
    }

    /// Refresh access token using a stored refresh token
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        // The token must both decode as a refresh JWT and still be live in
        // the store (logout revokes rows, not signatures)
        self.ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)
            .map_err(ServiceError::from)?;

        let user_id = self
            .ctx
            .refresh_token_repo()
            .find_user(&request.refresh_token)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        // Rotate: revoke the old token before issuing the replacement
        self.ctx
            .refresh_token_repo()
            .revoke(&request.refresh_token)
            .await?;

        info!(user_id = %user.id, "Tokens refreshed successfully");

        self.issue_tokens(&user).await
    }

    /// Logout user by revoking refresh tokens
    #[instrument(skip(self, refresh_token))]
    pub async fn logout(
        &self,
        user_id: Snowflake,
        refresh_token: Option<String>,
    ) -> ServiceResult<()> {
        match refresh_token {
            Some(token) => self.ctx.refresh_token_repo().revoke(&token).await?,
            None => {
                self.ctx
                    .refresh_token_repo()
                    .revoke_all_for_user(user_id)
                    .await?;
            }
        }

        info!(user_id = %user_id, "User logged out successfully");
        Ok(())
    }

    /// Generate a token pair and persist the refresh half
    async fn issue_tokens(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        self.ctx
            .refresh_token_repo()
            .store(
                user.id,
                &token_pair.refresh_token,
                self.ctx.jwt_service().refresh_expires_at(),
            )
            .await?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(user),
        ))
    }
}
