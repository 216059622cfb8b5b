mod dto;
pub mod handlers;
pub mod repo;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/review",
        get(handlers::list_reviews).post(handlers::create_review),
    )
}
