//! User database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for users table
///
/// `password_hash` is read separately and never part of this row.
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub lives_at: String,
    pub hobby1: String,
    pub hobby2: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
