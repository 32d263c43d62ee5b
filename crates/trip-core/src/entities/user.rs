//! User entity - a registered traveler

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::value_objects::RecordId;

/// Registered traveler profile
///
/// `current_age` is derived from `date_of_birth`; call [`User::refresh_age`]
/// whenever the record is loaded or changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: RecordId,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub current_age: u32,
    pub lives_at: String,
    pub hobby1: String,
    pub hobby2: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Age in whole years on `today`
    pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> u32 {
        let mut age = today.year() - date_of_birth.year();
        if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
            age -= 1;
        }
        u32::try_from(age).unwrap_or(0)
    }

    /// Recompute `current_age` against the current UTC date
    pub fn refresh_age(&mut self) {
        self.current_age = Self::age_on(self.date_of_birth, Utc::now().date_naive());
    }

    /// Trim free-text fields and lowercase the email
    pub fn normalize(&mut self) {
        fn trim_in_place(value: &mut String) {
            let trimmed = value.trim();
            if trimmed.len() != value.len() {
                *value = trimmed.to_string();
            }
        }

        trim_in_place(&mut self.full_name);
        self.email = self.email.trim().to_lowercase();
        trim_in_place(&mut self.phone_number);
        trim_in_place(&mut self.lives_at);
        trim_in_place(&mut self.hobby1);
        trim_in_place(&mut self.hobby2);
    }

    pub fn hobbies(&self) -> [&str; 2] {
        [&self.hobby1, &self.hobby2]
    }

    /// Check whether a plan or favorite with this phone number belongs to the user
    #[inline]
    pub fn owns_phone(&self, phone_number: &str) -> bool {
        self.phone_number == phone_number
    }
}

#[cfg(test)]
pub(crate) fn sample_user(id: i64, phone_number: &str) -> User {
    let now = Utc::now();
    let mut user = User {
        id: RecordId::new(id),
        full_name: format!("Traveler {id}"),
        email: format!("traveler{id}@example.com"),
        phone_number: phone_number.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1994, 6, 15).unwrap(),
        current_age: 0,
        lives_at: "Haifa".to_string(),
        hobby1: "hiking".to_string(),
        hobby2: "photography".to_string(),
        created_at: now,
        updated_at: now,
    };
    user.refresh_age();
    user
}
