use axum::{routing::get, Router};

pub mod items;
pub mod system;

/// Router for all inventory endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::index))
        .route("/health", get(system::health))
        .nest("/api/items", items::router())
}
