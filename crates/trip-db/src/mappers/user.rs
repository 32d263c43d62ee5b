//! User entity <-> model mapper

use trip_core::entities::User;
use trip_core::value_objects::RecordId;

use crate::models::UserModel;

/// Convert UserModel to User entity, deriving the age
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        let mut user = User {
            id: RecordId::new(model.id),
            full_name: model.full_name,
            email: model.email,
            phone_number: model.phone_number,
            date_of_birth: model.date_of_birth,
            current_age: 0,
            lives_at: model.lives_at,
            hobby1: model.hobby1,
            hobby2: model.hobby2,
            created_at: model.created_at,
            updated_at: model.updated_at,
        };
        user.refresh_age();
        user
    }
}

/// Convert User entity reference to values for database insertion
pub struct UserInsert<'a> {
    pub id: i64,
    pub full_name: &'a str,
    pub email: String,
    pub password_hash: &'a str,
    pub phone_number: &'a str,
    pub lives_at: &'a str,
    pub hobby1: &'a str,
    pub hobby2: &'a str,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a User, password_hash: &'a str) -> Self {
        Self {
            id: user.id.into_inner(),
            full_name: user.full_name.trim(),
            email: user.email.trim().to_lowercase(),
            password_hash,
            phone_number: user.phone_number.trim(),
            lives_at: user.lives_at.trim(),
            hobby1: user.hobby1.trim(),
            hobby2: user.hobby2.trim(),
        }
    }
}
