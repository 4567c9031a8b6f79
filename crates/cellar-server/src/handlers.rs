//! Request handlers: translate HTTP into store and statistics calls and
//! shape the JSON response envelope.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Serialize;
use tracing::instrument;

use cellar_core::stats::{BeerStats, TopBrewery, TopStyle, pending_count, round1};
use cellar_core::store::BeerStore;
use cellar_core::{ApiResponse, Beer, BeerId, BeerInput};

use super::error::ApiError;
use super::state::AppState;

/// `GET /api/beers`: all records, newest first.
#[instrument(skip(state))]
pub async fn list_beers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Beer>>>, ApiError> {
    let beers = state.store.list_all().await?;
    Ok(Json(ApiResponse::ok(beers)))
}

/// `GET /api/beers/:id`: a single record or 404.
#[instrument(skip(state))]
pub async fn get_beer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Beer>>, ApiError> {
    let id = BeerId::new(id)?;
    let beer = state.store.get_by_id(&id).await?;
    Ok(Json(ApiResponse::ok(beer)))
}

/// `POST /api/beers`: validate a full input and create.
#[instrument(skip(state, payload))]
pub async fn create_beer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BeerInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    let input = payload.validate().map_err(ApiError::Validation)?;
    let beer = state.store.create(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(beer, "Beer created successfully")),
    ))
}

/// `PUT /api/beers/:id`: validate a partial input and merge.
#[instrument(skip(state, payload))]
pub async fn update_beer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<BeerInput>, JsonRejection>,
) -> Result<Json<ApiResponse<Beer>>, ApiError> {
    let id = BeerId::new(id)?;
    let Json(payload) = payload?;
    let patch = payload.validate_partial().map_err(ApiError::Validation)?;
    let beer = state.store.update(&id, patch).await?;

    Ok(Json(ApiResponse::ok_with_message(
        beer,
        "Beer updated successfully",
    )))
}

/// `DELETE /api/beers/:id`: delete outright or 404.
#[instrument(skip(state))]
pub async fn delete_beer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let id = BeerId::new(id)?;
    state.store.delete(&id).await?;

    Ok(Json(ApiResponse::message_only("Beer deleted successfully")))
}

/// `GET /api/beers/stats`: the statistics summary, composed from the
/// store's aggregation queries.
#[instrument(skip(state))]
pub async fn beer_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<BeerStats>>, ApiError> {
    let store = &state.store;

    let total_beers = store.count().await?;
    let drank_beers = store.count_where(|b| b.drank).await?;
    let pending_beers = pending_count(total_beers, drank_beers);
    let rated_beers = store.count_where(|b| b.rating.is_some()).await?;
    let average_rating = round1(store.average_where(|b| b.rating.map(f64::from)).await?);

    let top_style = store
        .top_by_frequency(|b| &b.style)
        .await?
        .map(|c| TopStyle {
            style: c.value,
            count: c.count,
        });
    let top_brewery = store
        .top_by_frequency(|b| &b.brewery)
        .await?
        .map(|c| TopBrewery {
            brewery: c.value,
            count: c.count,
        });

    Ok(Json(ApiResponse::ok(BeerStats {
        total_beers,
        drank_beers,
        pending_beers,
        rated_beers,
        average_rating,
        top_style,
        top_brewery,
    })))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInfo {
    pub timestamp: String,
    pub uptime: f64,
    pub environment: String,
}

/// `GET /api/health`: liveness check.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthInfo>> {
    Json(ApiResponse::ok_with_message(
        HealthInfo {
            timestamp: Utc::now().to_rfc3339(),
            uptime: state.started_at.elapsed().as_secs_f64(),
            environment: state.config.environment.clone(),
        },
        "Beer management API is running",
    ))
}

/// Catch-all for unmatched paths.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::failure("Route not found")),
    )
}
