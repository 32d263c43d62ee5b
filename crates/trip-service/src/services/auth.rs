//! Authentication service
//!
//! Handles user registration and login.

use chrono::Utc;
use tracing::{info, instrument, warn};

use trip_common::auth::validate_password_strength;
use trip_common::AppError;
use trip_core::entities::User;
use trip_core::{DomainError, EmailAddress, PhoneNumber};

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest, UserProfileResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password)?;

        let email = EmailAddress::parse(&request.email)?;
        let phone = PhoneNumber::parse(&request.phone_number)?;
        let today = Utc::now().date_naive();
        if request.date_of_birth > today {
            return Err(DomainError::InvalidDateOfBirth.into());
        }
        require_text("full_name", &request.full_name)?;
        require_text("lives_at", &request.lives_at)?;
        require_text("hobby1", &request.hobby1)?;
        require_text("hobby2", &request.hobby2)?;

        let users = self.ctx.user_repo();
        if users.email_taken(email.as_str(), None).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }
        if users.phone_taken(phone.as_str(), None).await? {
            return Err(DomainError::PhoneAlreadyExists.into());
        }

        let password_hash = self.ctx.password_service().hash(&request.password)?;

        let now = Utc::now();
        let mut user = User {
            id: self.ctx.generate_id(),
            full_name: request.full_name,
            email: email.into_inner(),
            phone_number: phone.into_inner(),
            date_of_birth: request.date_of_birth,
            current_age: 0,
            lives_at: request.lives_at,
            hobby1: request.hobby1,
            hobby2: request.hobby2,
            created_at: now,
            updated_at: now,
        };
        user.normalize();
        user.refresh_age();

        // A concurrent registration may still win between the checks and the insert
        users.create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        self.issue_token(&user)
    }

    /// Login with email and password
    ///
    /// Unknown email, missing hash and wrong password all fail with `InvalidCredentials`.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let passwords = self.ctx.password_service();

        let Ok(email) = EmailAddress::parse(&request.email) else {
            return Err(passwords.reject_unknown(&request.password).into());
        };

        let Some(user) = self.ctx.user_repo().find_by_email(email.as_str()).await? else {
            warn!("Login failed: user not found");
            return Err(passwords.reject_unknown(&request.password).into());
        };

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if let Err(e) = passwords.verify_or_error(&request.password, &password_hash) {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(e.into());
        }

        info!(user_id = %user.id, "User logged in successfully");

        self.issue_token(&user)
    }

    fn issue_token(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token = self.ctx.jwt_service().generate_access_token(user.id)?;

        Ok(AuthResponse::new(
            token.access_token,
            token.expires_in,
            UserProfileResponse::from(user),
        ))
    }
}

/// Reject a free-text field that is blank after trimming
pub(crate) fn require_text(field: &str, value: &str) -> ServiceResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::ValidationError(format!("{field} must not be empty")).into());
    }
    Ok(())
}
