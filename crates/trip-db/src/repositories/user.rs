//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use trip_core::entities::User;
use trip_core::traits::{DeleteCascade, PhoneCascade, RepoResult, UserRepository};
use trip_core::value_objects::RecordId;

use crate::mappers::UserInsert;
use crate::models::UserModel;

use super::error::{map_db_error, map_user_conflict, user_not_found};

const USER_COLUMNS: &str = "id, full_name, email, phone_number, date_of_birth, lives_at, \
                            hobby1, hobby2, created_at, updated_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, predicate: &str, value: &str) -> RepoResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE {predicate}");
        let result = sqlx::query_as::<_, UserModel>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let result = sqlx::query_as::<_, UserModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.find_one("LOWER(email) = LOWER($1)", email.trim()).await
    }

    #[instrument(skip(self))]
    async fn find_by_phone(&self, phone_number: &str) -> RepoResult<Option<User>> {
        self.find_one("phone_number = $1", phone_number.trim()).await
    }

    #[instrument(skip(self))]
    async fn email_taken(&self, email: &str, excluding: Option<RecordId>) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM users
                WHERE LOWER(email) = LOWER($1) AND ($2::BIGINT IS NULL OR id <> $2)
            )
            ",
        )
        .bind(email.trim())
        .bind(excluding.map(RecordId::into_inner))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn phone_taken(
        &self,
        phone_number: &str,
        excluding: Option<RecordId>,
    ) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM users
                WHERE phone_number = $1 AND ($2::BIGINT IS NULL OR id <> $2)
            )
            ",
        )
        .bind(phone_number.trim())
        .bind(excluding.map(RecordId::into_inner))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, user, password_hash), fields(user_id = %user.id))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let insert = UserInsert::new(user, password_hash);

        sqlx::query(
            r"
            INSERT INTO users (id, full_name, email, password_hash, phone_number, date_of_birth,
                               lives_at, hobby1, hobby2, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(insert.id)
        .bind(insert.full_name)
        .bind(&insert.email)
        .bind(insert.password_hash)
        .bind(insert.phone_number)
        .bind(user.date_of_birth)
        .bind(insert.lives_at)
        .bind(insert.hobby1)
        .bind(insert.hobby2)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_user_conflict)?;

        Ok(())
    }

    #[instrument(skip(self, user, password_hash), fields(user_id = %user.id))]
    async fn update(
        &self,
        user: &User,
        password_hash: Option<&str>,
    ) -> RepoResult<Option<PhoneCascade>> {
        let insert = UserInsert::new(user, "");
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let old_phone = sqlx::query_scalar::<_, String>(
            r"
            SELECT phone_number FROM users WHERE id = $1 FOR UPDATE
            ",
        )
        .bind(insert.id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| user_not_found(user.id))?;

        sqlx::query(
            r"
            UPDATE users
            SET full_name = $2, email = $3, phone_number = $4, date_of_birth = $5,
                lives_at = $6, hobby1 = $7, hobby2 = $8,
                password_hash = COALESCE($9, password_hash), updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(insert.id)
        .bind(insert.full_name)
        .bind(&insert.email)
        .bind(insert.phone_number)
        .bind(user.date_of_birth)
        .bind(insert.lives_at)
        .bind(insert.hobby1)
        .bind(insert.hobby2)
        .bind(password_hash)
        .execute(&mut *tx)
        .await
        .map_err(map_user_conflict)?;

        let cascade = if old_phone == insert.phone_number {
            None
        } else {
            let plans = sqlx::query(
                r"
                UPDATE travel_plans SET phone_number = $2 WHERE phone_number = $1
                ",
            )
            .bind(&old_phone)
            .bind(insert.phone_number)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            let favorites = sqlx::query(
                r"
                UPDATE favorites SET favorite_phone_number = $2 WHERE favorite_phone_number = $1
                ",
            )
            .bind(&old_phone)
            .bind(insert.phone_number)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            Some(PhoneCascade {
                travel_plans: plans.rows_affected(),
                favorites: favorites.rows_affected(),
            })
        };

        tx.commit().await.map_err(map_db_error)?;

        if let Some(cascade) = cascade {
            debug!(
                travel_plans = cascade.travel_plans,
                favorites = cascade.favorites,
                "Propagated phone number change"
            );
        }

        Ok(cascade)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<DeleteCascade> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let phone_number = sqlx::query_scalar::<_, String>(
            r"
            SELECT phone_number FROM users WHERE id = $1 FOR UPDATE
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| user_not_found(id))?;

        let plans = sqlx::query(
            r"
            DELETE FROM travel_plans WHERE phone_number = $1
            ",
        )
        .bind(&phone_number)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let owned = sqlx::query(
            r"
            DELETE FROM favorites WHERE user_id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let targeting = sqlx::query(
            r"
            DELETE FROM favorites WHERE favorite_phone_number = $1 OR favorite_user_id = $2
            ",
        )
        .bind(&phone_number)
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM users WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(DeleteCascade {
            travel_plans: plans.rows_affected(),
            favorites_owned: owned.rows_affected(),
            favorites_targeting: targeting.rows_affected(),
        })
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: RecordId) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM users WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
