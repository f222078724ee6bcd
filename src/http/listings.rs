use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};

use super::{ApiError, AppState};
use crate::error::ServiceError;
use crate::service::ListingService;
use crate::store::ListingStore;

/// Run a listing operation on the blocking pool.
///
/// Store I/O is synchronous and mutations may wait on the writer lock.
async fn run<S, T, F>(state: &AppState<S>, op: F) -> Result<T, ApiError>
where
    S: ListingStore + 'static,
    T: Send + 'static,
    F: FnOnce(&ListingService<S>) -> Result<T, ServiceError> + Send + 'static,
{
    let service = state.listings.clone();
    let outcome = tokio::task::spawn_blocking(move || op(service.as_ref()))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "listing task panicked");
            ApiError::internal("Internal server error")
        })?;
    outcome.map_err(ApiError::from)
}

/// `GET /health`
pub(super) async fn health<S: ListingStore + 'static>(
    State(state): State<AppState<S>>,
) -> Result<impl IntoResponse, ApiError> {
    let count = run(&state, |service| service.list().map(|l| l.len())).await?;
    Ok(Json(json!({ "success": true, "listings": count })))
}

/// `GET /listings`
pub(super) async fn list<S: ListingStore + 'static>(
    State(state): State<AppState<S>>,
) -> Result<impl IntoResponse, ApiError> {
    let listings = run(&state, |service| service.list()).await?;
    Ok(Json(listings))
}

/// `POST /listings`
pub(super) async fn create<S: ListingStore + 'static>(
    State(state): State<AppState<S>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let listing = run(&state, move |service| service.create(&body)).await?;
    Ok((StatusCode::CREATED, Json(listing)))
}

/// `POST /listings/:id/like`
pub(super) async fn like<S: ListingStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let likes = run(&state, move |service| service.like(&id)).await?;
    Ok(Json(json!({ "success": true, "likes": likes })))
}

/// `POST /listings/:id/buy`
pub(super) async fn buy<S: ListingStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let listing = run(&state, move |service| service.buy(&id)).await?;
    Ok(Json(json!({ "success": true, "sold": listing.sold })))
}

/// `DELETE /listings/:id`
pub(super) async fn remove<S: ListingStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = run(&state, move |service| service.delete(&id)).await?;
    Ok(Json(json!({ "success": true, "removedId": removed })))
}
