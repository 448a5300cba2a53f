//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use parlor_core::entities::Message;
use parlor_core::traits::{MessageRepository, RepoResult};
use parlor_core::value_objects::Snowflake;

use crate::models::MessageModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn create(&self, message: &Message) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO messages (id, room_id, author_id, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(message.id.into_inner())
        .bind(message.room_id.into_inner())
        .bind(message.author_id.into_inner())
        .bind(&message.content)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_page(
        &self,
        room_id: Snowflake,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<Message>> {
        // The window is anchored at the newest message: fetch descending with
        // the offset, then flip into chronological order for the caller
        let mut results = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, room_id, author_id, content, created_at
            FROM messages
            WHERE room_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(room_id.into_inner())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.reverse();

        Ok(results.into_iter().map(Message::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_room(&self, room_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM messages WHERE room_id = $1
            ",
        )
        .bind(room_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_containing(&self, room_id: Snowflake, needle: &str) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM messages
            WHERE room_id = $1 AND POSITION($2 IN content) > 0
            ",
        )
        .bind(room_id.into_inner())
        .bind(needle)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_by_author(&self, user_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM messages WHERE author_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM messages WHERE created_at < $1
            ",
        )
        .bind(cutoff)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
