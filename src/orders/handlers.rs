use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::mailer::order_confirmation;
use crate::state::AppState;
use crate::users::handlers::is_valid_email;

use super::dto::{CreateOrderRequest, DeleteOrderResponse};
use super::repo::Order;

/// `POST /order` — persist the order, then send the confirmation email.
///
/// The send is awaited and handled explicitly; a mail-relay failure is
/// logged and the order still succeeds.
#[instrument(skip(state, payload))]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let email = payload.user_email.trim().to_lowercase();
    if !is_valid_email(&email) {
        return Err(ApiError::BadRequest("Invalid email".into()));
    }
    if payload.quantity <= 0 {
        return Err(ApiError::BadRequest("quantity must be positive".into()));
    }

    let order = Order::insert(
        &state.db,
        &email,
        &payload.product_name,
        payload.quantity,
        payload.price,
        payload.address.as_deref(),
        payload.phone.as_deref(),
    )
    .await?;

    if let Err(e) = state.mailer.send(&order_confirmation(&order)).await {
        warn!(error = %e, order_id = %order.id, "confirmation email failed");
    }

    info!(order_id = %order.id, email = %order.user_email, "order created");
    Ok((StatusCode::CREATED, Json(order)))
}

/// `GET /order/:email` — all orders placed under the given email.
#[instrument(skip(state))]
pub async fn list_orders_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = Order::list_by_email(&state.db, &email).await?;
    Ok(Json(orders))
}

/// `DELETE /order/:id`
#[instrument(skip(state))]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteOrderResponse>, ApiError> {
    let deleted = Order::delete_by_id(&state.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound("order".into()));
    }
    info!(order_id = %id, "order deleted");
    Ok(Json(DeleteOrderResponse { deleted }))
}
