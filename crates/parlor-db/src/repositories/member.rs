//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use parlor_core::entities::RoomMember;
use parlor_core::error::DomainError;
use parlor_core::traits::{MemberRepository, RepoResult};
use parlor_core::value_objects::Snowflake;

use super::error::map_db_error;

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn ensure(&self, member: &RoomMember) -> RepoResult<()> {
        // Get-or-create: repeat visits are a no-op
        sqlx::query(
            r"
            INSERT INTO room_members (room_id, user_id, joined_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (room_id, user_id) DO NOTHING
            ",
        )
        .bind(member.room_id.into_inner())
        .bind(member.user_id.into_inner())
        .bind(member.joined_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn is_member(&self, room_id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM room_members WHERE room_id = $1 AND user_id = $2)
            ",
        )
        .bind(room_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn delete(&self, room_id: Snowflake, user_id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM room_members WHERE room_id = $1 AND user_id = $2
            ",
        )
        .bind(room_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotRoomMember);
        }

        Ok(())
    }
}
