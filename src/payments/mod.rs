pub mod client;
pub mod handlers;

use axum::{routing::post, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/create-payment-intent", post(handlers::create_payment_intent))
}
