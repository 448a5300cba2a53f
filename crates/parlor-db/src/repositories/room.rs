//! PostgreSQL implementation of RoomRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use parlor_core::entities::Room;
use parlor_core::error::DomainError;
use parlor_core::traits::{RepoResult, RoomRepository};
use parlor_core::value_objects::Snowflake;

use crate::models::RoomModel;

use super::error::{map_db_error, map_unique_violation, room_not_found};

const ROOM_COLUMNS: &str = "id, name, description, is_private, owner_id, created_at, updated_at";

/// PostgreSQL implementation of RoomRepository
#[derive(Clone)]
pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    /// Create a new PgRoomRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PgRoomRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Room>> {
        let result = sqlx::query_as::<_, RoomModel>(&format!(
            "SELECT {ROOM_COLUMNS} FROM rooms WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Room::from))
    }

    #[instrument(skip(self))]
    async fn create_with_owner(&self, room: &Room) -> RepoResult<()> {
        // Room row and owner membership commit together; the unique index on
        // name resolves the duplicate-name race atomically
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO rooms (id, name, description, is_private, owner_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(room.id.into_inner())
        .bind(&room.name)
        .bind(&room.description)
        .bind(room.is_private)
        .bind(room.owner_id.into_inner())
        .bind(room.created_at)
        .bind(room.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::RoomNameTaken(room.name.clone())))?;

        sqlx::query(
            r"
            INSERT INTO room_members (room_id, user_id, joined_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(room.id.into_inner())
        .bind(room.owner_id.into_inner())
        .bind(room.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyMember))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, room: &Room) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE rooms
            SET name = $2, description = $3, is_private = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(room.id.into_inner())
        .bind(&room.name)
        .bind(&room.description)
        .bind(room.is_private)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::RoomNameTaken(room.name.clone())))?;

        if result.rows_affected() == 0 {
            return Err(room_not_found(room.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // Messages and memberships cascade with the room row
        let result = sqlx::query(
            r"
            DELETE FROM rooms WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(room_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_visible(&self, viewer: Option<Snowflake>) -> RepoResult<Vec<Room>> {
        let results = match viewer {
            Some(user_id) => {
                sqlx::query_as::<_, RoomModel>(&format!(
                    r"
                    SELECT {ROOM_COLUMNS} FROM rooms
                    WHERE NOT is_private
                       OR id IN (SELECT room_id FROM room_members WHERE user_id = $1)
                    ORDER BY created_at DESC
                    "
                ))
                .bind(user_id.into_inner())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, RoomModel>(&format!(
                    r"
                    SELECT {ROOM_COLUMNS} FROM rooms
                    WHERE NOT is_private
                    ORDER BY created_at DESC
                    "
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Room::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Room>> {
        let results = sqlx::query_as::<_, RoomModel>(&format!(
            "SELECT {ROOM_COLUMNS} FROM rooms ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Room::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_member(&self, user_id: Snowflake) -> RepoResult<Vec<Room>> {
        let results = sqlx::query_as::<_, RoomModel>(&format!(
            r"
            SELECT {ROOM_COLUMNS} FROM rooms
            WHERE id IN (SELECT room_id FROM room_members WHERE user_id = $1)
            ORDER BY created_at DESC
            "
        ))
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Room::from).collect())
    }

    #[instrument(skip(self))]
    async fn member_count(&self, room_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM room_members WHERE room_id = $1
            ",
        )
        .bind(room_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM rooms")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
