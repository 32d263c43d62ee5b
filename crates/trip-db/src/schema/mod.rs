//! Database schema bootstrap

use sqlx::PgPool;
use tracing::info;

/// Table and index definitions; every statement is idempotent
pub const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Unique index on `LOWER(users.email)`
pub const USERS_EMAIL_UNIQUE: &str = "users_email_unique";

/// Unique index on `users.phone_number`
pub const USERS_PHONE_UNIQUE: &str = "users_phone_number_unique";

/// Unique index on `(favorites.user_id, favorites.favorite_phone_number)`
pub const FAVORITES_PAIR_UNIQUE: &str = "favorites_user_phone_unique";

/// Create missing tables and indexes
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    info!("Database schema ready");
    Ok(())
}
