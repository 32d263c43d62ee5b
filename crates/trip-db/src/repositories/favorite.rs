//! PostgreSQL implementation of FavoriteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use trip_core::entities::Favorite;
use trip_core::error::DomainError;
use trip_core::traits::{FavoriteRepository, RepoResult};
use trip_core::value_objects::RecordId;

use crate::models::FavoriteModel;

use super::error::{favorite_not_found, map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of FavoriteRepository
#[derive(Clone)]
pub struct PgFavoriteRepository {
    pool: PgPool,
}

impl PgFavoriteRepository {
    /// Create a new PgFavoriteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for PgFavoriteRepository {
    #[instrument(skip(self))]
    async fn exists(&self, user_id: RecordId, phone_number: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM favorites WHERE user_id = $1 AND favorite_phone_number = $2
            )
            ",
        )
        .bind(user_id.into_inner())
        .bind(phone_number)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: RecordId) -> RepoResult<Vec<Favorite>> {
        let models = sqlx::query_as::<_, FavoriteModel>(
            r"
            SELECT id, user_id, favorite_user_id, favorite_phone_number, date_added
            FROM favorites
            WHERE user_id = $1
            ORDER BY id ASC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Favorite::from).collect())
    }

    #[instrument(skip(self, favorite), fields(user_id = %favorite.user_id))]
    async fn create(&self, favorite: &Favorite) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            INSERT INTO favorites (id, user_id, favorite_user_id, favorite_phone_number, date_added)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, favorite_phone_number) DO NOTHING
            ",
        )
        .bind(favorite.id.into_inner())
        .bind(favorite.user_id.into_inner())
        .bind(favorite.favorite_user_id.into_inner())
        .bind(&favorite.favorite_phone_number)
        .bind(favorite.date_added)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || {
                DomainError::FavoriteUserNotFound(favorite.favorite_phone_number.clone())
            })
        })?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: RecordId, phone_number: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM favorites WHERE user_id = $1 AND favorite_phone_number = $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(phone_number)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(favorite_not_found(phone_number));
        }

        Ok(())
    }
}
