use std::sync::Arc;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use tower_http::cors::CorsLayer;

use super::handlers::{
    beer_stats, create_beer, delete_beer, get_beer, health, list_beers, not_found, update_beer,
};
use super::state::AppState;

/// Build the full application router, mounted under `/api`.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE]);

    // `/stats` is registered ahead of the id route so it is never parsed
    // as an identifier.
    let beers = Router::new()
        .route("/", get(list_beers).post(create_beer))
        .route("/stats", get(beer_stats))
        .route(
            "/:id",
            get(get_beer).put(update_beer).delete(delete_beer),
        );

    Router::new()
        .route("/api/health", get(health))
        .nest("/api/beers", beers)
        .fallback(not_found)
        .layer(cors)
        .with_state(state)
}
