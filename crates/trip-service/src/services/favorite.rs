//! Favorite service
//!
//! Lets a traveler bookmark other travelers by phone number.

use tracing::{debug, info, instrument};

use trip_core::entities::{Favorite, FavoriteEntry, FavoriteToggle, User};
use trip_core::{DomainError, RecordId};

use crate::dto::{FavoriteResponse, FavoriteStatusResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Favorite service
pub struct FavoriteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FavoriteService<'a> {
    /// Create a new FavoriteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Favorited travelers in the order they were added, each with their latest plan
    ///
    /// Favorites whose phone number no longer resolves to a user are left out.
    #[instrument(skip(self))]
    pub async fn list_favorites(&self, user_id: RecordId) -> ServiceResult<Vec<FavoriteResponse>> {
        let favorites = self.ctx.favorite_repo().find_by_user(user_id).await?;

        let mut entries = Vec::with_capacity(favorites.len());
        for favorite in favorites {
            let phone = &favorite.favorite_phone_number;
            let Some(user) = self.ctx.user_repo().find_by_phone(phone).await? else {
                debug!(favorite_id = %favorite.id, "Skipping favorite with dangling phone reference");
                continue;
            };
            let latest_plan = self.ctx.travel_plan_repo().find_latest_by_phone(phone).await?;

            entries.push(FavoriteEntry {
                user,
                latest_plan,
                date_added: favorite.date_added,
            });
        }

        Ok(entries.iter().map(FavoriteResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn is_favorite(
        &self,
        user_id: RecordId,
        phone_number: &str,
    ) -> ServiceResult<FavoriteStatusResponse> {
        let phone_number = phone_number.trim();
        let is_favorite = self.ctx.favorite_repo().exists(user_id, phone_number).await?;

        Ok(FavoriteStatusResponse {
            phone_number: phone_number.to_string(),
            is_favorite,
        })
    }

    /// Add a favorite; adding an existing one is a no-op
    #[instrument(skip(self))]
    pub async fn add_favorite(&self, user_id: RecordId, phone_number: &str) -> ServiceResult<()> {
        let phone_number = phone_number.trim();
        let requester = self.requester(user_id).await?;

        let target = self
            .ctx
            .user_repo()
            .find_by_phone(phone_number)
            .await?
            .ok_or_else(|| DomainError::FavoriteUserNotFound(phone_number.to_string()))?;

        if target.id == requester.id {
            return Err(
                DomainError::ValidationError("cannot favorite yourself".to_string()).into(),
            );
        }

        let favorites = self.ctx.favorite_repo();
        if favorites.exists(user_id, phone_number).await? {
            debug!(user_id = %user_id, "Already in favorites");
            return Ok(());
        }

        let favorite = Favorite::new(self.ctx.generate_id(), user_id, &target);
        if favorites.create(&favorite).await? {
            info!(user_id = %user_id, favorite_user_id = %target.id, "Favorite added");
        }

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn remove_favorite(&self, user_id: RecordId, phone_number: &str) -> ServiceResult<()> {
        self.ctx
            .favorite_repo()
            .delete(user_id, phone_number.trim())
            .await?;

        info!(user_id = %user_id, "Favorite removed");

        Ok(())
    }

    /// Flip membership and report the new state
    #[instrument(skip(self))]
    pub async fn toggle_favorite(
        &self,
        user_id: RecordId,
        phone_number: &str,
    ) -> ServiceResult<FavoriteToggle> {
        let phone_number = phone_number.trim();

        if self.ctx.favorite_repo().exists(user_id, phone_number).await? {
            match self.ctx.favorite_repo().delete(user_id, phone_number).await {
                // Removed concurrently since the membership check
                Ok(()) | Err(DomainError::FavoriteNotFound(_)) => {}
                Err(e) => return Err(e.into()),
            }
            info!(user_id = %user_id, "Favorite toggled off");
            return Ok(FavoriteToggle::Removed);
        }

        self.add_favorite(user_id, phone_number).await?;
        info!(user_id = %user_id, "Favorite toggled on");

        Ok(FavoriteToggle::Added)
    }

    async fn requester(&self, user_id: RecordId) -> ServiceResult<User> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?)
    }
}
