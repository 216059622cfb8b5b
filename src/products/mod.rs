mod dto;
pub mod handlers;
pub mod repo;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/product",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route("/product/:id", get(handlers::get_product))
}
