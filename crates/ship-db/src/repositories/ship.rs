//! PostgreSQL implementation of ShipStore

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use ship_core::entities::Ship;
use ship_core::error::DomainError;
use ship_core::traits::{RepoResult, ShipStore};
use ship_core::value_objects::UserId;

use crate::models::ShipModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ShipStore
#[derive(Clone)]
pub struct PgShipStore {
    pool: PgPool,
}

impl PgShipStore {
    /// Create a new PgShipStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Bootstrap the ships table and its indexes.
    ///
    /// Idempotent; run once at process start before the store is used.
    pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS ships (
                id BIGSERIAL PRIMARY KEY,
                user1_id TEXT NOT NULL,
                user2_id TEXT NOT NULL,
                name TEXT NOT NULL,
                support_count BIGINT NOT NULL DEFAULT 0 CHECK (support_count >= 0)
            )
            ",
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r"
            CREATE UNIQUE INDEX IF NOT EXISTS ships_name_lower_idx ON ships (LOWER(name))
            ",
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r"
            CREATE INDEX IF NOT EXISTS ships_pair_idx
            ON ships (LEAST(user1_id, user2_id), GREATEST(user1_id, user2_id))
            ",
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl ShipStore for PgShipStore {
    #[instrument(skip(self))]
    async fn create(&self, user1: &UserId, user2: &UserId, name: &str) -> RepoResult<Ship> {
        let model = sqlx::query_as::<_, ShipModel>(
            r"
            INSERT INTO ships (user1_id, user2_id, name)
            VALUES ($1, $2, $3)
            RETURNING id, user1_id, user2_id, name, support_count
            ",
        )
        .bind(user1.as_str())
        .bind(user2.as_str())
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateName(name.to_string())))?;

        Ok(Ship::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Ship>> {
        let result = sqlx::query_as::<_, ShipModel>(
            r"
            SELECT id, user1_id, user2_id, name, support_count
            FROM ships
            WHERE LOWER(name) = LOWER($1)
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Ship::from))
    }

    #[instrument(skip(self))]
    async fn find_by_pair(&self, user1: &UserId, user2: &UserId) -> RepoResult<Option<Ship>> {
        let result = sqlx::query_as::<_, ShipModel>(
            r"
            SELECT id, user1_id, user2_id, name, support_count
            FROM ships
            WHERE (user1_id = $1 AND user2_id = $2) OR (user1_id = $2 AND user2_id = $1)
            ",
        )
        .bind(user1.as_str())
        .bind(user2.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Ship::from))
    }

    #[instrument(skip(self))]
    async fn rename(&self, user1: &UserId, user2: &UserId, new_name: &str) -> RepoResult<Ship> {
        let result = sqlx::query_as::<_, ShipModel>(
            r"
            UPDATE ships
            SET name = $3
            WHERE (user1_id = $1 AND user2_id = $2) OR (user1_id = $2 AND user2_id = $1)
            RETURNING id, user1_id, user2_id, name, support_count
            ",
        )
        .bind(user1.as_str())
        .bind(user2.as_str())
        .bind(new_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::DuplicateName(new_name.to_string()))
        })?;

        result.map(Ship::from).ok_or(DomainError::PairNotFound)
    }

    #[instrument(skip(self))]
    async fn delete(&self, name: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM ships WHERE LOWER(name) = LOWER($1)
            ",
        )
        .bind(name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ShipNotFound(name.to_string()));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_support(&self, name: &str) -> RepoResult<i64> {
        // Single-statement increment keeps concurrent votes lossless.
        let result = sqlx::query_scalar::<_, i64>(
            r"
            UPDATE ships
            SET support_count = support_count + 1
            WHERE LOWER(name) = LOWER($1)
            RETURNING support_count
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.ok_or_else(|| DomainError::ShipNotFound(name.to_string()))
    }

    #[instrument(skip(self))]
    async fn set_support(&self, name: &str, value: i64) -> RepoResult<()> {
        if value < 0 {
            return Err(DomainError::InvalidSupportValue(value));
        }

        let result = sqlx::query(
            r"
            UPDATE ships SET support_count = $2 WHERE LOWER(name) = LOWER($1)
            ",
        )
        .bind(name)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ShipNotFound(name.to_string()));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn top_by_score(&self, limit: usize) -> RepoResult<Vec<Ship>> {
        let rows = sqlx::query_as::<_, ShipModel>(
            r"
            SELECT id, user1_id, user2_id, name, support_count
            FROM ships
            ORDER BY support_count DESC, id ASC
            LIMIT $1
            ",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Ship::from).collect())
    }
}
