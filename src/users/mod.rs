mod dto;
pub mod handlers;
pub mod repo;

use axum::{
    routing::{get, put},
    Router,
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::list_users))
        .route("/admin/:email", get(handlers::admin_flag))
        .route("/user/:email", put(handlers::upsert_user))
        .route("/user/admin/:email", put(handlers::promote_admin))
}
