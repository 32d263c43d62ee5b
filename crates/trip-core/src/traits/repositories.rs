//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Travel plans and favorites reference users by phone number, a mutable natural
//! key. Implementations keep those references consistent: [`UserRepository::update`]
//! rewrites them when a phone number changes and [`UserRepository::delete`] removes
//! them, each as a single atomic unit.

use async_trait::async_trait;

use crate::entities::{Favorite, TravelPlan, User};
use crate::error::DomainError;
use crate::value_objects::{Cluster, RecordId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Rows rewritten when a user's phone number changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhoneCascade {
    pub travel_plans: u64,
    pub favorites: u64,
}

/// Rows removed together with a user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteCascade {
    pub travel_plans: u64,
    pub favorites_owned: u64,
    pub favorites_targeting: u64,
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<User>>;

    /// Find user by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Find user by exact phone number
    async fn find_by_phone(&self, phone_number: &str) -> RepoResult<Option<User>>;

    /// Check if another user already holds this email (case-insensitive)
    async fn email_taken(&self, email: &str, excluding: Option<RecordId>) -> RepoResult<bool>;

    /// Check if another user already holds this phone number
    async fn phone_taken(&self, phone_number: &str, excluding: Option<RecordId>)
        -> RepoResult<bool>;

    /// Create a new user
    ///
    /// Fails with `EmailAlreadyExists` or `PhoneAlreadyExists` when a concurrent
    /// registration won the race.
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Persist profile fields, and the password hash when one is given
    ///
    /// If the stored phone number differs from `user.phone_number`, every travel plan
    /// and favorite referencing the old number is rewritten in the same transaction
    /// and the counts are returned.
    async fn update(
        &self,
        user: &User,
        password_hash: Option<&str>,
    ) -> RepoResult<Option<PhoneCascade>>;

    /// Delete a user together with their travel plans and favorites in both directions
    async fn delete(&self, id: RecordId) -> RepoResult<DeleteCascade>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: RecordId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Travel Plan Repository
// ============================================================================

#[async_trait]
pub trait TravelPlanRepository: Send + Sync {
    /// Find plan by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<TravelPlan>>;

    /// All plans in a cluster, in insertion order
    async fn find_by_cluster(&self, cluster: Cluster) -> RepoResult<Vec<TravelPlan>>;

    /// Plans submitted from a phone number, most recent first
    async fn find_by_phone(&self, phone_number: &str) -> RepoResult<Vec<TravelPlan>>;

    /// Most recent plan submitted from a phone number
    async fn find_latest_by_phone(&self, phone_number: &str) -> RepoResult<Option<TravelPlan>>;

    /// Every plan, in insertion order
    async fn find_all(&self) -> RepoResult<Vec<TravelPlan>>;

    /// Store a clustered plan
    async fn create(&self, plan: &TravelPlan) -> RepoResult<()>;

    /// Delete a plan
    async fn delete(&self, id: RecordId) -> RepoResult<()>;
}

// ============================================================================
// Favorite Repository
// ============================================================================

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Check whether `user_id` has favorited `phone_number`
    async fn exists(&self, user_id: RecordId, phone_number: &str) -> RepoResult<bool>;

    /// Favorites owned by a user, in insertion order
    async fn find_by_user(&self, user_id: RecordId) -> RepoResult<Vec<Favorite>>;

    /// Store a favorite unless the pair already exists
    ///
    /// Returns `false` when `(user_id, favorite_phone_number)` was already present.
    async fn create(&self, favorite: &Favorite) -> RepoResult<bool>;

    /// Remove a favorite; fails with `FavoriteNotFound` if nothing was removed
    async fn delete(&self, user_id: RecordId, phone_number: &str) -> RepoResult<()>;
}
