// ABOUTME: Message API handlers for posting, listing, and counting messages.
// ABOUTME: Translates HTTP requests into message service calls and results into JSON responses.

use anonboard_core::Message;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::app_state::SharedState;
use crate::service::ServiceError;

/// Request body for posting a message. The text is optional at the wire level
/// so a missing field reaches the service as a validation failure instead of
/// an opaque deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct PostMessageRequest {
    pub text: Option<String>,
}

/// POST /messages - Submit a new anonymous message. The body is parsed by
/// hand so that a missing or malformed payload gets the same 400 response as
/// a missing text field.
pub async fn post_message(State(state): State<SharedState>, body: Bytes) -> impl IntoResponse {
    let raw_text = serde_json::from_slice::<PostMessageRequest>(&body)
        .ok()
        .and_then(|req| req.text);

    match state.service.submit(raw_text).await {
        Ok(_) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "status": "Message received" })),
        )
            .into_response(),
        Err(ServiceError::Validation) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "Invalid message format" })),
        )
            .into_response(),
        Err(ServiceError::Store(e)) => {
            tracing::error!("failed to persist message: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "failed to persist message" })),
            )
                .into_response()
        }
    }
}

/// GET /messages - Return all messages in append order.
pub async fn list_messages(State(state): State<SharedState>) -> Json<Vec<Message>> {
    Json(state.service.all_messages().await)
}

/// GET /messages/count - Return the total message count.
pub async fn message_count(State(state): State<SharedState>) -> Json<serde_json::Value> {
    let count = state.service.total_count().await;
    Json(serde_json::json!({ "count": count }))
}
