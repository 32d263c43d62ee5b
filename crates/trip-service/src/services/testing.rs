//! In-memory doubles for service tests

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use parking_lot::Mutex;

use trip_common::auth::JwtService;
use trip_core::entities::{Favorite, TravelPlan, User};
use trip_core::error::{DomainError, PredictionError};
use trip_core::normalize::{NormalizedTravelPlan, RawTravelPlan};
use trip_core::traits::{
    ClusterPredictor, DeleteCascade, FavoriteRepository, PhoneCascade, RepoResult,
    TravelPlanRepository, UserRepository,
};
use trip_core::value_objects::{Cluster, IdGenerator, RecordId};

use super::context::{ServiceContext, ServiceContextBuilder};

pub(crate) const TEST_SECRET: &str = "service-test-secret-with-32-bytes!";

#[derive(Default)]
struct State {
    users: Vec<(User, String)>,
    plans: Vec<TravelPlan>,
    favorites: Vec<Favorite>,
    fail_plan_inserts: bool,
    fail_user_updates: bool,
}

/// One store backing all three repository traits, with the same cascade rules as PostgreSQL
#[derive(Default)]
pub(crate) struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub(crate) fn insert_user(&self, user: User) {
        self.state.lock().users.push((user, String::new()));
    }

    pub(crate) fn insert_plan(&self, plan: TravelPlan) {
        self.state.lock().plans.push(plan);
    }

    pub(crate) fn insert_favorite(&self, favorite: Favorite) {
        self.state.lock().favorites.push(favorite);
    }

    pub(crate) fn plans(&self) -> Vec<TravelPlan> {
        self.state.lock().plans.clone()
    }

    pub(crate) fn favorites(&self) -> Vec<Favorite> {
        self.state.lock().favorites.clone()
    }

    pub(crate) fn fail_plan_inserts(&self) {
        self.state.lock().fail_plan_inserts = true;
    }

    pub(crate) fn fail_user_updates(&self) {
        self.state.lock().fail_user_updates = true;
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<User>> {
        let state = self.state.lock();
        Ok(state.users.iter().find(|(u, _)| u.id == id).map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let email = email.trim().to_lowercase();
        let state = self.state.lock();
        Ok(state.users.iter().find(|(u, _)| u.email == email).map(|(u, _)| u.clone()))
    }

    async fn find_by_phone(&self, phone_number: &str) -> RepoResult<Option<User>> {
        let state = self.state.lock();
        Ok(state
            .users
            .iter()
            .find(|(u, _)| u.phone_number == phone_number.trim())
            .map(|(u, _)| u.clone()))
    }

    async fn email_taken(&self, email: &str, excluding: Option<RecordId>) -> RepoResult<bool> {
        let email = email.trim().to_lowercase();
        let state = self.state.lock();
        Ok(state
            .users
            .iter()
            .any(|(u, _)| u.email == email && Some(u.id) != excluding))
    }

    async fn phone_taken(&self, phone_number: &str, excluding: Option<RecordId>) -> RepoResult<bool> {
        let state = self.state.lock();
        Ok(state
            .users
            .iter()
            .any(|(u, _)| u.phone_number == phone_number.trim() && Some(u.id) != excluding))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut state = self.state.lock();
        let email = user.email.to_lowercase();
        if state.users.iter().any(|(u, _)| u.email == email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        if state.users.iter().any(|(u, _)| u.phone_number == user.phone_number) {
            return Err(DomainError::PhoneAlreadyExists);
        }
        state.users.push((user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn update(
        &self,
        user: &User,
        password_hash: Option<&str>,
    ) -> RepoResult<Option<PhoneCascade>> {
        let mut state = self.state.lock();
        if state.fail_user_updates {
            return Err(DomainError::DatabaseError("connection reset".to_string()));
        }
        let old_phone = state
            .users
            .iter()
            .find(|(u, _)| u.id == user.id)
            .map(|(u, _)| u.phone_number.clone())
            .ok_or(DomainError::UserNotFound(user.id))?;

        let cascade = (old_phone != user.phone_number).then(|| {
            let mut cascade = PhoneCascade::default();
            for plan in state.plans.iter_mut().filter(|p| p.phone_number == old_phone) {
                plan.phone_number.clone_from(&user.phone_number);
                cascade.travel_plans += 1;
            }
            for fav in state
                .favorites
                .iter_mut()
                .filter(|f| f.favorite_phone_number == old_phone)
            {
                fav.favorite_phone_number.clone_from(&user.phone_number);
                cascade.favorites += 1;
            }
            cascade
        });

        if let Some((stored, hash)) = state.users.iter_mut().find(|(u, _)| u.id == user.id) {
            *stored = user.clone();
            if let Some(password_hash) = password_hash {
                *hash = password_hash.to_string();
            }
        }
        Ok(cascade)
    }

    async fn delete(&self, id: RecordId) -> RepoResult<DeleteCascade> {
        let mut state = self.state.lock();
        let phone = state
            .users
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(u, _)| u.phone_number.clone())
            .ok_or(DomainError::UserNotFound(id))?;

        let plans_before = state.plans.len();
        state.plans.retain(|p| p.phone_number != phone);
        let owned_before = state.favorites.len();
        state.favorites.retain(|f| f.user_id != id);
        let targeting_before = state.favorites.len();
        state
            .favorites
            .retain(|f| f.favorite_phone_number != phone && f.favorite_user_id != id);
        let targeting_after = state.favorites.len();
        state.users.retain(|(u, _)| u.id != id);

        Ok(DeleteCascade {
            travel_plans: (plans_before - state.plans.len()) as u64,
            favorites_owned: (owned_before - targeting_before) as u64,
            favorites_targeting: (targeting_before - targeting_after) as u64,
        })
    }

    async fn get_password_hash(&self, id: RecordId) -> RepoResult<Option<String>> {
        let state = self.state.lock();
        Ok(state.users.iter().find(|(u, _)| u.id == id).map(|(_, h)| h.clone()))
    }
}

#[async_trait]
impl TravelPlanRepository for InMemoryStore {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<TravelPlan>> {
        Ok(self.state.lock().plans.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_cluster(&self, cluster: Cluster) -> RepoResult<Vec<TravelPlan>> {
        let mut plans: Vec<_> = self
            .state
            .lock()
            .plans
            .iter()
            .filter(|p| p.cluster == cluster)
            .cloned()
            .collect();
        plans.sort_by_key(|p| p.id);
        Ok(plans)
    }

    async fn find_by_phone(&self, phone_number: &str) -> RepoResult<Vec<TravelPlan>> {
        let mut plans: Vec<_> = self
            .state
            .lock()
            .plans
            .iter()
            .filter(|p| p.phone_number == phone_number)
            .cloned()
            .collect();
        plans.sort_by_key(|p| std::cmp::Reverse(p.id));
        Ok(plans)
    }

    async fn find_latest_by_phone(&self, phone_number: &str) -> RepoResult<Option<TravelPlan>> {
        Ok(TravelPlanRepository::find_by_phone(self, phone_number)
            .await?
            .into_iter()
            .next())
    }

    async fn find_all(&self) -> RepoResult<Vec<TravelPlan>> {
        let mut plans = self.state.lock().plans.clone();
        plans.sort_by_key(|p| p.id);
        Ok(plans)
    }

    async fn create(&self, plan: &TravelPlan) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state.fail_plan_inserts {
            return Err(DomainError::DatabaseError("connection reset".to_string()));
        }
        state.plans.push(plan.clone());
        Ok(())
    }

    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let mut state = self.state.lock();
        let before = state.plans.len();
        state.plans.retain(|p| p.id != id);
        if state.plans.len() == before {
            return Err(DomainError::TravelPlanNotFound(id));
        }
        Ok(())
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryStore {
    async fn exists(&self, user_id: RecordId, phone_number: &str) -> RepoResult<bool> {
        Ok(self
            .state
            .lock()
            .favorites
            .iter()
            .any(|f| f.user_id == user_id && f.favorite_phone_number == phone_number))
    }

    async fn find_by_user(&self, user_id: RecordId) -> RepoResult<Vec<Favorite>> {
        let mut favorites: Vec<_> = self
            .state
            .lock()
            .favorites
            .iter()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect();
        favorites.sort_by_key(|f| f.id);
        Ok(favorites)
    }

    async fn create(&self, favorite: &Favorite) -> RepoResult<bool> {
        let mut state = self.state.lock();
        let present = state.favorites.iter().any(|f| {
            f.user_id == favorite.user_id
                && f.favorite_phone_number == favorite.favorite_phone_number
        });
        if present {
            return Ok(false);
        }
        state.favorites.push(favorite.clone());
        Ok(true)
    }

    async fn delete(&self, user_id: RecordId, phone_number: &str) -> RepoResult<()> {
        let mut state = self.state.lock();
        let before = state.favorites.len();
        state
            .favorites
            .retain(|f| !(f.user_id == user_id && f.favorite_phone_number == phone_number));
        if state.favorites.len() == before {
            return Err(DomainError::FavoriteNotFound(phone_number.to_string()));
        }
        Ok(())
    }
}

/// Predictor returning a fixed reply and recording what it was asked
pub(crate) struct ScriptedPredictor {
    reply: Mutex<Result<Cluster, PredictionError>>,
    calls: Mutex<Vec<NormalizedTravelPlan>>,
}

impl ScriptedPredictor {
    pub(crate) fn always(cluster: i32) -> Self {
        Self {
            reply: Mutex::new(Cluster::new(cluster).ok_or(PredictionError::NoClusterAssigned)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(error: PredictionError) -> Self {
        Self {
            reply: Mutex::new(Err(error)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn set_cluster(&self, cluster: i32) {
        *self.reply.lock() = Cluster::new(cluster).ok_or(PredictionError::NoClusterAssigned);
    }

    pub(crate) fn calls(&self) -> Vec<NormalizedTravelPlan> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl ClusterPredictor for ScriptedPredictor {
    async fn predict(&self, plan: &NormalizedTravelPlan) -> Result<Cluster, PredictionError> {
        self.calls.lock().push(plan.clone());
        self.reply.lock().clone()
    }
}

/// Context wired to a fresh store and the given predictor
pub(crate) fn test_context(
    predictor: ScriptedPredictor,
) -> (ServiceContext, Arc<InMemoryStore>, Arc<ScriptedPredictor>) {
    let store = Arc::new(InMemoryStore::default());
    let predictor = Arc::new(predictor);
    let ctx = ServiceContextBuilder::new()
        .user_repo(store.clone())
        .travel_plan_repo(store.clone())
        .favorite_repo(store.clone())
        .predictor(predictor.clone())
        .jwt_service(Arc::new(JwtService::new(TEST_SECRET, 3600)))
        .id_generator(Arc::new(IdGenerator::new(7)))
        .build()
        .unwrap();
    (ctx, store, predictor)
}

/// Stored user with a phone number derived from `n`
pub(crate) fn traveler(ctx: &ServiceContext, n: u32) -> User {
    let now = Utc::now();
    let mut user = User {
        id: ctx.generate_id(),
        full_name: format!("Traveler {n}"),
        email: format!("traveler{n}@example.com"),
        phone_number: format!("050{n:07}"),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 20).unwrap(),
        current_age: 0,
        lives_at: "Haifa".to_string(),
        hobby1: "hiking".to_string(),
        hobby2: "cooking".to_string(),
        created_at: now,
        updated_at: now,
    };
    user.refresh_age();
    user
}

/// Clustered plan for an existing phone number
pub(crate) fn plan_for(ctx: &ServiceContext, phone_number: &str, cluster: i32) -> TravelPlan {
    let normalized = NormalizedTravelPlan::from_raw(RawTravelPlan {
        destination: "Caribbean",
        departure_month: "august",
        spontaneity: "yes",
    })
    .unwrap();
    TravelPlan::from_prediction(
        ctx.generate_id(),
        phone_number.to_string(),
        normalized,
        Cluster::new(cluster).unwrap(),
    )
}
