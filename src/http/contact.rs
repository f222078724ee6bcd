use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};
use tracing::error;

use super::{ApiError, AppState};
use crate::contact::ContactMessage;

/// `POST /contact`
pub(super) async fn send<S: Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let message = ContactMessage::from_json(&body)?;

    state.mailer.send(&message).await.map_err(|e| {
        error!(error = %e, "contact relay failed");
        ApiError::internal("Failed to send message")
    })?;

    Ok(Json(json!({ "success": true, "message": "Message sent" })))
}
