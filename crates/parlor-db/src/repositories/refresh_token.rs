//! PostgreSQL implementation of RefreshTokenRepository
//!
//! Server-side session persistence: refresh tokens are rows, so logout and
//! rotation revoke them immediately regardless of their embedded expiry.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use parlor_core::traits::{RefreshTokenRepository, RepoResult};
use parlor_core::value_objects::Snowflake;

use crate::models::RefreshTokenModel;

use super::error::map_db_error;

/// PostgreSQL implementation of RefreshTokenRepository
#[derive(Clone)]
pub struct PgRefreshTokenRepository {
    pool: PgPool,
}

impl PgRefreshTokenRepository {
    /// Create a new PgRefreshTokenRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenRepository for PgRefreshTokenRepository {
    #[instrument(skip(self, token))]
    async fn store(
        &self,
        user_id: Snowflake,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO refresh_tokens (user_id, token, expires_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(user_id.into_inner())
        .bind(token)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, token))]
    async fn find_user(&self, token: &str) -> RepoResult<Option<Snowflake>> {
        let row = sqlx::query_as::<_, RefreshTokenModel>(
            r"
            SELECT id, user_id, token, expires_at, created_at, revoked_at
            FROM refresh_tokens
            WHERE token = $1
            ",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row
            .filter(RefreshTokenModel::is_valid)
            .map(|m| Snowflake::new(m.user_id)))
    }

    #[instrument(skip(self, token))]
    async fn revoke(&self, token: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE refresh_tokens SET revoked_at = NOW()
            WHERE token = $1 AND revoked_at IS NULL
            ",
        )
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn revoke_all_for_user(&self, user_id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE refresh_tokens SET revoked_at = NOW()
            WHERE user_id = $1 AND revoked_at IS NULL
            ",
        )
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
