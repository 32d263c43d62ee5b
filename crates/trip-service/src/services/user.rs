//! User service
//!
//! Handles profile reads, partial updates and account deletion.

use chrono::Utc;
use tracing::{debug, info, instrument};

use trip_common::auth::validate_password_strength;
use trip_core::entities::User;
use trip_core::{DomainError, EmailAddress, PhoneNumber, RecordId};

use crate::dto::{UpdateUserRequest, UserProfileResponse};

use super::auth::require_text;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the authenticated user's profile
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: RecordId) -> ServiceResult<UserProfileResponse> {
        let user = self.get_user_entity(user_id).await?;
        Ok(UserProfileResponse::from(&user))
    }

    /// Get user entity by ID
    #[instrument(skip(self))]
    pub async fn get_user_entity(&self, user_id: RecordId) -> ServiceResult<User> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?)
    }

    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> ServiceResult<Option<User>> {
        Ok(self.ctx.user_repo().find_by_email(email).await?)
    }

    #[instrument(skip(self))]
    pub async fn find_by_phone(&self, phone_number: &str) -> ServiceResult<Option<User>> {
        Ok(self.ctx.user_repo().find_by_phone(phone_number.trim()).await?)
    }

    /// Apply a partial profile update
    ///
    /// A new phone number is propagated to every travel plan and favorite that
    /// referenced the old one, atomically with the profile write.
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: RecordId,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserProfileResponse> {
        let users = self.ctx.user_repo();
        let mut user = self.get_user_entity(user_id).await?;

        // Hashed up front so the profile and the password land in one write
        let password_hash = match &request.password {
            Some(password) => {
                validate_password_strength(password)?;
                Some(self.ctx.password_service().hash(password)?)
            }
            None => None,
        };

        if let Some(email) = request.email {
            let email = EmailAddress::parse(&email)?;
            if email.as_str() != user.email {
                if users.email_taken(email.as_str(), Some(user_id)).await? {
                    return Err(DomainError::EmailAlreadyExists.into());
                }
                user.email = email.into_inner();
            }
        }

        if let Some(phone) = request.phone_number {
            let phone = PhoneNumber::parse(&phone)?;
            if !user.owns_phone(phone.as_str()) {
                if users.phone_taken(phone.as_str(), Some(user_id)).await? {
                    return Err(DomainError::PhoneAlreadyExists.into());
                }
                user.phone_number = phone.into_inner();
            }
        }

        if let Some(date_of_birth) = request.date_of_birth {
            if date_of_birth > Utc::now().date_naive() {
                return Err(DomainError::InvalidDateOfBirth.into());
            }
            user.date_of_birth = date_of_birth;
        }

        if let Some(full_name) = request.full_name {
            require_text("full_name", &full_name)?;
            user.full_name = full_name;
        }
        if let Some(lives_at) = request.lives_at {
            require_text("lives_at", &lives_at)?;
            user.lives_at = lives_at;
        }
        if let Some(hobby1) = request.hobby1 {
            require_text("hobby1", &hobby1)?;
            user.hobby1 = hobby1;
        }
        if let Some(hobby2) = request.hobby2 {
            require_text("hobby2", &hobby2)?;
            user.hobby2 = hobby2;
        }

        user.normalize();
        user.refresh_age();
        user.updated_at = Utc::now();

        if let Some(cascade) = users.update(&user, password_hash.as_deref()).await? {
            info!(
                user_id = %user_id,
                travel_plans = cascade.travel_plans,
                favorites = cascade.favorites,
                "Phone number changed, references updated"
            );
        }
        if password_hash.is_some() {
            debug!(user_id = %user_id, "Password changed");
        }

        info!(user_id = %user_id, "User profile updated");

        Ok(UserProfileResponse::from(&user))
    }

    /// Delete the account with its travel plans and favorites in both directions
    #[instrument(skip(self))]
    pub async fn delete_account(&self, user_id: RecordId) -> ServiceResult<()> {
        let cascade = self.ctx.user_repo().delete(user_id).await?;

        info!(
            user_id = %user_id,
            travel_plans = cascade.travel_plans,
            favorites_owned = cascade.favorites_owned,
            favorites_targeting = cascade.favorites_targeting,
            "User account deleted"
        );

        Ok(())
    }
}
