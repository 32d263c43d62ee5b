//! Service context - dependency container for services
//!
//! Holds the repositories, the cluster predictor, and the auth helpers needed by services.

use std::sync::Arc;

use trip_common::auth::{JwtService, PasswordService};
use trip_core::traits::{ClusterPredictor, FavoriteRepository, TravelPlanRepository, UserRepository};
use trip_core::{IdGenerator, RecordId};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every dependency is shared behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    travel_plan_repo: Arc<dyn TravelPlanRepository>,
    favorite_repo: Arc<dyn FavoriteRepository>,

    // External classifier
    predictor: Arc<dyn ClusterPredictor>,

    // Services
    jwt_service: Arc<JwtService>,
    password_service: PasswordService,
    id_generator: Arc<IdGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        travel_plan_repo: Arc<dyn TravelPlanRepository>,
        favorite_repo: Arc<dyn FavoriteRepository>,
        predictor: Arc<dyn ClusterPredictor>,
        jwt_service: Arc<JwtService>,
        id_generator: Arc<IdGenerator>,
    ) -> Self {
        Self {
            user_repo,
            travel_plan_repo,
            favorite_repo,
            predictor,
            jwt_service,
            password_service: PasswordService::new(),
            id_generator,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the travel plan repository
    pub fn travel_plan_repo(&self) -> &dyn TravelPlanRepository {
        self.travel_plan_repo.as_ref()
    }

    /// Get the favorite repository
    pub fn favorite_repo(&self) -> &dyn FavoriteRepository {
        self.favorite_repo.as_ref()
    }

    /// Get the cluster predictor
    pub fn predictor(&self) -> &dyn ClusterPredictor {
        self.predictor.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the password service
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    /// Generate a new record id
    pub fn generate_id(&self) -> RecordId {
        self.id_generator.next_id()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("predictor", &"dyn ClusterPredictor")
            .field("jwt_service", &self.jwt_service)
            .field("worker_id", &self.id_generator.worker_id())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    travel_plan_repo: Option<Arc<dyn TravelPlanRepository>>,
    favorite_repo: Option<Arc<dyn FavoriteRepository>>,
    predictor: Option<Arc<dyn ClusterPredictor>>,
    jwt_service: Option<Arc<JwtService>>,
    id_generator: Option<Arc<IdGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn travel_plan_repo(mut self, repo: Arc<dyn TravelPlanRepository>) -> Self {
        self.travel_plan_repo = Some(repo);
        self
    }

    pub fn favorite_repo(mut self, repo: Arc<dyn FavoriteRepository>) -> Self {
        self.favorite_repo = Some(repo);
        self
    }

    pub fn predictor(mut self, predictor: Arc<dyn ClusterPredictor>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn id_generator(mut self, generator: Arc<IdGenerator>) -> Self {
        self.id_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// A missing id generator defaults to worker 0.
    ///
    /// # Errors
    /// Returns `ServiceError::MissingDependency` if any other dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo.ok_or(ServiceError::MissingDependency("user_repo"))?,
            self.travel_plan_repo.ok_or(ServiceError::MissingDependency("travel_plan_repo"))?,
            self.favorite_repo.ok_or(ServiceError::MissingDependency("favorite_repo"))?,
            self.predictor.ok_or(ServiceError::MissingDependency("predictor"))?,
            self.jwt_service.ok_or(ServiceError::MissingDependency("jwt_service"))?,
            self.id_generator.unwrap_or_default(),
        ))
    }
}
