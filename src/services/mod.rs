pub mod faq;
pub mod health;
pub mod session;
pub mod session_sweeper;
pub mod webhook;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::services::faq::FaqStore;

/// The HTTP surface: the fulfillment webhook plus health endpoints.
pub fn http_router(store: FaqStore) -> Router {
    Router::new()
        .merge(health::router(store.clone()))
        .merge(webhook::router(store))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
