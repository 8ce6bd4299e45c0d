//! Router configuration for the HTTP API.
//!
//! Sets up all routes and middleware (CORS, tracing).

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Read-only API: any origin may query it.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/program", get(handlers::get_program))
        .route("/program/catalog", get(handlers::get_catalog_program))
        .route("/program/item-counts", get(handlers::get_item_counts));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::config::{DayOverflow, ProgramConfig, UnmappedPolicy};
    use crate::models::ClockTime;
    use crate::models::RegisteredItem;
    use crate::program::ProgramPlanner;
    use crate::repository::{
        InMemoryRepository, RegistrationRepository, RepositoryError, RepositoryResult,
    };

    fn make_item(code: &str, item_type: &str, category: &str) -> RegisteredItem {
        RegisteredItem::new(item_type, code, category).with_school("Test School")
    }

    fn app_with(items: Vec<RegisteredItem>, config: ProgramConfig) -> Router {
        let repo = Arc::new(InMemoryRepository::with_items(items).unwrap())
            as Arc<dyn RegistrationRepository>;
        create_router(AppState::new(repo, ProgramPlanner::new(config).unwrap()))
    }

    fn app(items: Vec<RegisteredItem>) -> Router {
        app_with(items, ProgramConfig::default())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[derive(Debug)]
    struct DownRepository;

    #[async_trait]
    impl RegistrationRepository for DownRepository {
        async fn registered_items(&self) -> RepositoryResult<Vec<RegisteredItem>> {
            Err(RepositoryError::Unavailable("store offline".into()))
        }

        async fn register_school(
            &self,
            _school_name: &str,
            _category: &str,
            _item_types: &[String],
        ) -> RepositoryResult<Vec<RegisteredItem>> {
            Err(RepositoryError::Unavailable("store offline".into()))
        }

        async fn health_check(&self) -> RepositoryResult<bool> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(app(vec![]), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["repository"], "connected");
    }

    #[tokio::test]
    async fn test_program() {
        let items = vec![
            make_item("P1", "Play", "Primary"),
            make_item("P2", "Modern Creative Dance", "Primary"),
            make_item("E1", "Unregulated Item", "Pre-Primary"),
        ];
        let (status, body) = get_json(app(items), "/v1/program").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalPerformances"], 3);
        assert_eq!(body["unscheduledItems"], 0);

        let hall2 = &body["venues"][1];
        assert_eq!(hall2["name"], "Hall 2");
        assert_eq!(hall2["slotCount"], 2);
        assert_eq!(hall2["totalElapsed"], "0h 25m");
        assert_eq!(hall2["slots"][1]["order"], 2);
        assert_eq!(hall2["slots"][1]["startTime"], "6:18 AM");
        assert_eq!(hall2["slots"][1]["endTime"], "6:25 AM");
        assert_eq!(hall2["slots"][1]["code"], "B3");
        assert_eq!(hall2["slots"][1]["maxCast"], 9);
        assert_eq!(hall2["slots"][1]["schoolName"], "Test School");

        let hall1 = &body["venues"][0];
        assert_eq!(hall1["slots"][0]["endTime"], "6:10 AM");
        assert_eq!(hall1["slots"][0]["maxCast"], Value::Null);
    }

    #[tokio::test]
    async fn test_program_with_no_registrations() {
        let (status, body) = get_json(app(vec![]), "/v1/program").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalPerformances"], 0);
        assert_eq!(body["venues"][0]["totalElapsed"], "0h 0m");
    }

    #[tokio::test]
    async fn test_catalog_program() {
        let (status, body) = get_json(app(vec![]), "/v1/program/catalog").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalPerformances"], 16);
        assert_eq!(body["venues"][1]["slots"][0]["item"], "Play");
    }

    #[tokio::test]
    async fn test_item_counts() {
        let items = vec![
            make_item("P1", "Play", "Primary"),
            make_item("P2", "Play", "Primary"),
            make_item("E1", "Dramatized Singing Games", "Pre-Primary"),
        ];
        let (status, body) = get_json(app(items), "/v1/program/item-counts").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalItems"], 3);
        assert_eq!(body["counts"][0]["category"], "Pre-Primary");
        assert_eq!(body["counts"][1]["itemType"], "Play");
        assert_eq!(body["counts"][1]["count"], 2);
    }

    #[tokio::test]
    async fn test_unmapped_rejected_is_unprocessable() {
        let config = ProgramConfig {
            unmapped_categories: UnmappedPolicy::Reject,
            ..ProgramConfig::default()
        };
        let items = vec![make_item("S1", "Play", "Secondary")];
        let (status, body) = get_json(app_with(items, config), "/v1/program").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "UNMAPPED_CATEGORIES");
        assert_eq!(body["details"], "Secondary");
    }

    #[tokio::test]
    async fn test_day_overflow_rejected_is_unprocessable() {
        let config = ProgramConfig {
            start_time: ClockTime::from_hm(23, 40),
            day_overflow: DayOverflow::Reject,
            ..ProgramConfig::default()
        };
        let items = vec![make_item("F1", "Film", "Primary")];
        let (status, body) = get_json(app_with(items, config), "/v1/program").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "DAY_OVERFLOW");
        assert_eq!(body["message"], "venue 'Hall 2' runs past midnight (ends at 24:10)");
    }

    #[tokio::test]
    async fn test_repository_unavailable() {
        let state = AppState::new(
            Arc::new(DownRepository),
            ProgramPlanner::new(ProgramConfig::default()).unwrap(),
        );
        let (status, body) = get_json(create_router(state.clone()), "/v1/program").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], "REPOSITORY_ERROR");

        let (status, body) = get_json(create_router(state), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["repository"], "disconnected");
    }
}
