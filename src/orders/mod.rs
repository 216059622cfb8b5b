mod dto;
pub mod handlers;
pub mod repo;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    // GET takes an email, DELETE an order id; they share the one path slot.
    Router::new()
        .route("/order", post(handlers::create_order))
        .route(
            "/order/:key",
            get(handlers::list_orders_by_email).delete(handlers::delete_order),
        )
}
