//! Liveness and readiness of the FAQ service.
//!
//! `/health` reports whether the FAQ store answers queries and how many
//! categories it currently serves. It answers 503 while the store is down.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::services::faq::FaqStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Degraded,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: Status,
    pub version: String,
    pub uptime_secs: u64,
    pub store: StoreReport,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreReport {
    pub backend: String,
    pub pool_size: u32,
    /// Time taken to list the categories.
    pub latency_ms: u64,
    /// `None` when the listing failed.
    pub categories: Option<usize>,
}

#[derive(Clone)]
struct HealthState {
    store: FaqStore,
    started: Instant,
}

/// `/health`, `/health/ready` and `/health/live`, backed by `store`.
pub fn router(store: FaqStore) -> Router {
    let state = HealthState {
        store,
        started: Instant::now(),
    };

    Router::new()
        .route("/health", get(report))
        .route("/health/ready", get(ready))
        .route("/health/live", get(|| async { StatusCode::OK }))
        .with_state(state)
}

async fn report(State(state): State<HealthState>) -> (StatusCode, Json<HealthReport>) {
    let db = state.store.db();
    let query_started = Instant::now();
    let categories = match state.store.categories().await {
        Ok(categories) => Some(categories.len()),
        Err(e) => {
            tracing::warn!("Health check could not list FAQ categories: {}", e);
            None
        }
    };
    let latency_ms = u64::try_from(query_started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let (code, status) = match categories {
        Some(_) => (StatusCode::OK, Status::Ok),
        None => (StatusCode::SERVICE_UNAVAILABLE, Status::Degraded),
    };

    let report = HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.started.elapsed().as_secs(),
        store: StoreReport {
            backend: db.backend().to_string(),
            pool_size: db.pool_size(),
            latency_ms,
            categories,
        },
    };
    (code, Json(report))
}

async fn ready(State(state): State<HealthState>) -> StatusCode {
    match state.store.db().ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::debug!("Not ready: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{connection::DatabaseManager, models::FaqEntry};
    use axum_test::TestServer;
    use tempfile::TempDir;

    async fn create_store() -> (FaqStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_url = format!("sqlite://{}", temp_dir.path().join("health.db").display());

        let db = DatabaseManager::new(&db_url)
            .await
            .expect("Failed to create test database");
        db.run_migrations().await.expect("Failed to run migrations");

        (FaqStore::new(db), temp_dir)
    }

    #[tokio::test]
    async fn test_report_counts_categories() {
        let (store, _temp_dir) = create_store().await;
        for (question, category) in [("Q1", "Visas"), ("Q2", "Visas"), ("Q3", "Housing")] {
            FaqEntry {
                question: question.to_string(),
                answer: "A".to_string(),
                category: category.to_string(),
            }
            .upsert(&store.db().pool)
            .await
            .expect("Failed to insert FAQ entry");
        }
        let server = TestServer::new(router(store)).expect("Failed to create test server");

        let response = server.get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let report: HealthReport = response.json();
        assert_eq!(report.status, Status::Ok);
        assert_eq!(report.store.backend, "sqlite");
        assert_eq!(report.store.categories, Some(2));
        assert_eq!(report.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_report_on_empty_store_is_ok() {
        let (store, _temp_dir) = create_store().await;
        let server = TestServer::new(router(store)).expect("Failed to create test server");

        let report: HealthReport = server.get("/health").await.json();

        assert_eq!(report.status, Status::Ok);
        assert_eq!(report.store.categories, Some(0));
    }

    #[tokio::test]
    async fn test_closed_store_is_degraded() {
        let (store, _temp_dir) = create_store().await;
        store.db().close().await;
        let server = TestServer::new(router(store)).expect("Failed to create test server");

        let response = server.get("/health").expect_failure().await;
        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        let report: HealthReport = response.json();
        assert_eq!(report.status, Status::Degraded);
        assert_eq!(report.store.categories, None);

        let response = server.get("/health/ready").expect_failure().await;
        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        // Liveness does not depend on the store
        let response = server.get("/health/live").await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ready_when_store_reachable() {
        let (store, _temp_dir) = create_store().await;
        let server = TestServer::new(router(store)).expect("Failed to create test server");

        let response = server.get("/health/ready").await;

        assert_eq!(response.status_code(), StatusCode::OK);
    }
}
