//! Dialogflow-style fulfillment webhook backed by the FAQ store.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};

use crate::services::faq::FaqStore;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    pub query_result: QueryResult,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub query_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub fulfillment_text: String,
}

pub fn router(store: FaqStore) -> Router {
    Router::new()
        .route("/webhook", post(webhook))
        .with_state(store)
}

async fn webhook(
    State(store): State<FaqStore>,
    payload: Result<Json<WebhookRequest>, JsonRejection>,
) -> (StatusCode, Json<WebhookResponse>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let reason = rejection.body_text();
            tracing::warn!("Rejected webhook request: {}", reason);
            return (
                StatusCode::BAD_REQUEST,
                Json(WebhookResponse {
                    fulfillment_text: format!("Malformed webhook request: {reason}"),
                }),
            );
        }
    };

    let query = request.query_result.query_text;
    tracing::info!("Webhook query: '{}'", query);
    let answer = store.answer_for(&query).await;

    (
        StatusCode::OK,
        Json(WebhookResponse {
            fulfillment_text: answer,
        }),
    )
}
