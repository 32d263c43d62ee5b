//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL (JWT_SECRET is optional)
//!
//! The prediction service is replaced by an in-process stub.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error_code, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn register(server: &TestServer) -> (RegisterRequest, AuthResponse) {
    let request = RegisterRequest::unique();
    let response = server.post("/auth/register", &request).await.unwrap();
    let auth = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

async fn submit_plan(server: &TestServer, token: &str) -> TravelPlanResponse {
    let response = server
        .post_auth("/travel-plans", token, &CreateTravelPlanRequest::caribbean())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn cluster_matches(server: &TestServer, cluster: i32, token: &str) -> ClusterMatchesResponse {
    let response = server
        .get_auth(&format!("/clusters/{cluster}/matches"), token)
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start(unique_cluster()).await.expect("Failed to start server");
    let response = server.get_raw("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start(unique_cluster()).await.expect("Failed to start server");
    let response = server.get_raw("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start(unique_cluster()).await.expect("Failed to start server");
    let (request, auth) = register(&server).await;

    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.access_token.is_empty());
    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.phone_number, request.phone_number);
    assert_eq!(auth.user.date_of_birth, request.date_of_birth);
    assert!(auth.user.current_age >= 30);
}

#[tokio::test]
async fn test_register_duplicate_email_any_case() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start(unique_cluster()).await.expect("Failed to start server");
    let (first, _) = register(&server).await;

    let mut second = RegisterRequest::unique();
    second.email = first.email.to_uppercase();
    let response = server.post("/auth/register", &second).await.unwrap();
    assert_error_code(response, StatusCode::CONFLICT, "EMAIL_ALREADY_EXISTS")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_register_duplicate_phone() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start(unique_cluster()).await.expect("Failed to start server");
    let (first, _) = register(&server).await;

    let mut second = RegisterRequest::unique();
    second.phone_number = format!(" {} ", first.phone_number);
    let response = server.post("/auth/register", &second).await.unwrap();
    assert_error_code(response, StatusCode::CONFLICT, "PHONE_ALREADY_EXISTS")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_concurrent_registrations_accept_exactly_one() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start(unique_cluster()).await.expect("Failed to start server");
    let first = RegisterRequest::unique();
    let mut second = RegisterRequest::unique();
    second.email = first.email.clone();

    let (a, b) = tokio::join!(
        server.post("/auth/register", &first),
        server.post("/auth/register", &second),
    );
    let mut statuses = [a.unwrap().status(), b.unwrap().status()];
    statuses.sort();

    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::CONFLICT]);
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start(unique_cluster()).await.expect("Failed to start server");
    let (request, registered) = register(&server).await;

    let mut login = LoginRequest::from_register(&request);
    login.email = login.email.to_uppercase();
    let response = server.post("/auth/login", &login).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.id, registered.user.id);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start(unique_cluster()).await.expect("Failed to start server");
    let (request, _) = register(&server).await;

    let wrong_password = LoginRequest {
        email: request.email.clone(),
        password: "wrongpass".to_string(),
    };
    let response = server.post("/auth/login", &wrong_password).await.unwrap();
    assert_error_code(response, StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS")
        .await
        .unwrap();

    let unknown = LoginRequest {
        email: "nobody-here@example.com".to_string(),
        password: "wrongpass".to_string(),
    };
    let response = server.post("/auth/login", &unknown).await.unwrap();
    assert_error_code(response, StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS")
        .await
        .unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start(unique_cluster()).await.expect("Failed to start server");
    let (request, auth) = register(&server).await;

    let response = server
        .get_auth("/users/@me", &auth.access_token)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.full_name, request.full_name);
    assert_eq!(user.lives_at, request.lives_at);
    assert_eq!((user.hobby1, user.hobby2), (request.hobby1, request.hobby2));
}

#[tokio::test]
async fn test_get_current_user_unauthorized() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start(unique_cluster()).await.expect("Failed to start server");

    let response = server.get("/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_phone_change_propagates_to_plans_and_favorites() {
    if !check_test_env() {
        return;
    }

    let cluster = unique_cluster();
    let server = TestServer::start(cluster).await.expect("Failed to start server");
    let (_, target) = register(&server).await;
    let (_, fan) = register(&server).await;

    submit_plan(&server, &target.access_token).await;
    let response = server
        .put_auth(&format!("/favorites/{}", target.user.phone_number), &fan.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let new_phone = RegisterRequest::unique().phone_number;
    let response = server
        .patch_auth(
            "/users/@me",
            &target.access_token,
            &json!({ "phone_number": new_phone }),
        )
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.phone_number, new_phone);

    let response = server
        .get_auth("/travel-plans/@me", &target.access_token)
        .await
        .unwrap();
    let plans: Vec<TravelPlanResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].phone_number, new_phone);

    let response = server
        .get_auth(&format!("/favorites/{new_phone}"), &fan.access_token)
        .await
        .unwrap();
    let status: FavoriteStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(status.is_favorite);

    let response = server
        .get_auth(
            &format!("/favorites/{}", target.user.phone_number),
            &fan.access_token,
        )
        .await
        .unwrap();
    let status: FavoriteStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!status.is_favorite);
}

#[tokio::test]
async fn test_update_to_taken_phone_conflicts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start(unique_cluster()).await.expect("Failed to start server");
    let (first, _) = register(&server).await;
    let (_, second) = register(&server).await;

    let response = server
        .patch_auth(
            "/users/@me",
            &second.access_token,
            &json!({ "phone_number": first.phone_number }),
        )
        .await
        .unwrap();
    assert_error_code(response, StatusCode::CONFLICT, "PHONE_ALREADY_EXISTS")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_account_cascades() {
    if !check_test_env() {
        return;
    }

    let cluster = unique_cluster();
    let server = TestServer::start(cluster).await.expect("Failed to start server");
    let (_, leaving) = register(&server).await;
    let (_, friend) = register(&server).await;

    submit_plan(&server, &leaving.access_token).await;
    submit_plan(&server, &friend.access_token).await;
    for (owner, target) in [(&leaving, &friend), (&friend, &leaving)] {
        let response = server
            .put_auth(&format!("/favorites/{}", target.user.phone_number), &owner.access_token)
            .await
            .unwrap();
        assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    }

    let response = server
        .delete_auth("/users/@me", &leaving.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The departed traveler no longer shows up as a match or a favorite
    let matches = cluster_matches(&server, cluster, &friend.access_token).await;
    assert!(matches.matches.is_empty());

    let response = server.get_auth("/favorites", &friend.access_token).await.unwrap();
    let favorites: Vec<FavoriteResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(favorites.is_empty());

    let response = server
        .get_auth("/users/@me", &leaving.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Travel Plan Tests
// ============================================================================

#[tokio::test]
async fn test_create_plan_normalizes_before_prediction() {
    if !check_test_env() {
        return;
    }

    let cluster = unique_cluster();
    let server = TestServer::start(cluster).await.expect("Failed to start server");
    let (request, auth) = register(&server).await;

    let plan_request = CreateTravelPlanRequest::new("South America trip!", "  JUNE ", "YES");
    let response = server
        .post_auth("/travel-plans", &auth.access_token, &plan_request)
        .await
        .unwrap();
    let plan: TravelPlanResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let label = "south america - for example, brazil, argentina, chile, peru, colombia";
    assert_eq!(plan.destination, label);
    assert_eq!(plan.departure_month, "june");
    assert_eq!(plan.spontaneity, "yes");
    assert_eq!(plan.cluster, cluster);
    assert_eq!(plan.phone_number, request.phone_number);

    assert_eq!(
        server.predictor.last_request(),
        Some(json!({
            "wantstotravelto": label,
            "wantstoleaveon": "june",
            "isspontanious": "yes",
        }))
    );
}

#[tokio::test]
async fn test_invalid_plan_never_reaches_predictor() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start(unique_cluster()).await.expect("Failed to start server");
    let (_, auth) = register(&server).await;

    for plan in [
        CreateTravelPlanRequest::new("Caribbean", "Juneuary", "yes"),
        CreateTravelPlanRequest::new("Caribbean", "june", "maybe"),
        CreateTravelPlanRequest::new("   ", "june", "no"),
    ] {
        let response = server
            .post_auth("/travel-plans", &auth.access_token, &plan)
            .await
            .unwrap();
        assert_error_code(response, StatusCode::BAD_REQUEST, "INVALID_TRAVEL_PLAN")
            .await
            .unwrap();
    }

    assert_eq!(server.predictor.calls(), 0);
}

#[tokio::test]
async fn test_prediction_failure_persists_nothing() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start(unique_cluster()).await.expect("Failed to start server");
    let (_, auth) = register(&server).await;
    server.predictor.set_failing(true);

    let response = server
        .post_auth("/travel-plans", &auth.access_token, &CreateTravelPlanRequest::caribbean())
        .await
        .unwrap();
    assert_error_code(response, StatusCode::SERVICE_UNAVAILABLE, "PREDICTION_UNAVAILABLE")
        .await
        .unwrap();

    let response = server
        .get_auth("/travel-plans/@me", &auth.access_token)
        .await
        .unwrap();
    let plans: Vec<TravelPlanResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(plans.is_empty());

    let response = server
        .get_auth("/travel-plans/@me/matches", &auth.access_token)
        .await
        .unwrap();
    assert_error_code(response, StatusCode::NOT_FOUND, "NO_TRAVEL_PLAN")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_travel_plan() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start(unique_cluster()).await.expect("Failed to start server");
    let (_, owner) = register(&server).await;
    let (_, stranger) = register(&server).await;
    let plan = submit_plan(&server, &owner.access_token).await;
    let path = format!("/travel-plans/{}", plan.id);

    // Someone else's plan looks absent
    let response = server.delete_auth(&path, &stranger.access_token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.delete_auth(&path, &owner.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete_auth(&path, &owner.access_token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Matching Tests
// ============================================================================

#[tokio::test]
async fn test_matches_dedup_and_exclude_self() {
    if !check_test_env() {
        return;
    }

    let cluster = unique_cluster();
    let server = TestServer::start(cluster).await.expect("Failed to start server");
    let (_, me) = register(&server).await;
    let (_, eager) = register(&server).await;
    let (_, calm) = register(&server).await;

    submit_plan(&server, &me.access_token).await;
    submit_plan(&server, &eager.access_token).await;
    submit_plan(&server, &eager.access_token).await;
    submit_plan(&server, &calm.access_token).await;

    let response = cluster_matches(&server, cluster, &me.access_token).await;
    assert_eq!(response.cluster, cluster);

    let phones: Vec<_> = response.matches.iter().map(|m| m.phone_number.as_str()).collect();
    assert_eq!(
        phones,
        vec![eager.user.phone_number.as_str(), calm.user.phone_number.as_str()]
    );
    assert!(response.matches.iter().all(|m| !m.is_favorite));

    // Same list through the requester's latest plan
    let response = server
        .get_auth("/travel-plans/@me/matches", &me.access_token)
        .await
        .unwrap();
    let latest: ClusterMatchesResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(latest.matches.len(), 2);
}

#[tokio::test]
async fn test_empty_cluster_returns_empty_list() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start(unique_cluster()).await.expect("Failed to start server");
    let (_, me) = register(&server).await;

    let response = cluster_matches(&server, unique_cluster(), &me.access_token).await;
    assert!(response.matches.is_empty());
}

#[tokio::test]
async fn test_travel_history_lists_matches_per_plan() {
    if !check_test_env() {
        return;
    }

    let first_cluster = unique_cluster();
    let second_cluster = unique_cluster();
    let server = TestServer::start(first_cluster).await.expect("Failed to start server");
    let (_, me) = register(&server).await;
    let (_, buddy) = register(&server).await;

    submit_plan(&server, &me.access_token).await;
    submit_plan(&server, &buddy.access_token).await;
    server.predictor.set_cluster(second_cluster);
    submit_plan(&server, &me.access_token).await;

    let response = server
        .get_auth("/users/@me/history", &me.access_token)
        .await
        .unwrap();
    let history: Vec<TravelHistoryEntryResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].plan.cluster, second_cluster);
    assert!(history[0].matches.is_empty());
    assert_eq!(history[1].plan.cluster, first_cluster);
    assert_eq!(history[1].matches.len(), 1);
    assert_eq!(history[1].matches[0].user_id, buddy.user.id);
}

// ============================================================================
// Favorite Tests
// ============================================================================

#[tokio::test]
async fn test_favorite_annotates_matches() {
    if !check_test_env() {
        return;
    }

    let cluster = unique_cluster();
    let server = TestServer::start(cluster).await.expect("Failed to start server");
    let (_, me) = register(&server).await;
    let (_, other) = register(&server).await;
    submit_plan(&server, &other.access_token).await;

    let path = format!("/favorites/{}", other.user.phone_number);
    for _ in 0..2 {
        let response = server.put_auth(&path, &me.access_token).await.unwrap();
        assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    }

    let matches = cluster_matches(&server, cluster, &me.access_token).await;
    assert_eq!(matches.matches.len(), 1);
    assert!(matches.matches[0].is_favorite);

    let response = server.get_auth("/favorites", &me.access_token).await.unwrap();
    let favorites: Vec<FavoriteResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].user_id, other.user.id);
    assert_eq!(
        favorites[0].latest_plan.as_ref().map(|p| p.cluster),
        Some(cluster)
    );
}

#[tokio::test]
async fn test_favorite_unknown_or_self() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start(unique_cluster()).await.expect("Failed to start server");
    let (_, me) = register(&server).await;

    let nobody = RegisterRequest::unique().phone_number;
    let response = server
        .put_auth(&format!("/favorites/{nobody}"), &me.access_token)
        .await
        .unwrap();
    assert_error_code(response, StatusCode::NOT_FOUND, "FAVORITE_USER_NOT_FOUND")
        .await
        .unwrap();

    let response = server
        .put_auth(&format!("/favorites/{}", me.user.phone_number), &me.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .delete_auth(&format!("/favorites/{nobody}"), &me.access_token)
        .await
        .unwrap();
    assert_error_code(response, StatusCode::NOT_FOUND, "UNKNOWN_FAVORITE")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_toggle_favorite_twice() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start(unique_cluster()).await.expect("Failed to start server");
    let (_, me) = register(&server).await;
    let (_, other) = register(&server).await;
    let path = format!("/favorites/{}/toggle", other.user.phone_number);

    let response = server.post_empty_auth(&path, &me.access_token).await.unwrap();
    let first: ToggleFavoriteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first.status, "added");
    assert!(first.is_favorite);

    let response = server.post_empty_auth(&path, &me.access_token).await.unwrap();
    let second: ToggleFavoriteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(second.status, "removed");
    assert!(!second.is_favorite);

    let response = server
        .get_auth(&format!("/favorites/{}", other.user.phone_number), &me.access_token)
        .await
        .unwrap();
    let status: FavoriteStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.phone_number, other.user.phone_number);
    assert!(!status.is_favorite);
}
