use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::auth::jwt::AuthUser;
use crate::errors::ApiError;
use crate::state::AppState;

const CURRENCY: &str = "usd";

#[derive(Debug, Deserialize)]
pub struct CreatePaymentIntentRequest {
    pub price: i64,
}

#[derive(Debug, Serialize)]
pub struct CreatePaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

/// Price arrives in whole currency units; the processor wants minor units.
fn amount_minor(price: i64) -> i64 {
    price * 100
}

/// `POST /create-payment-intent` — token-gated pass-through to the processor.
#[instrument(skip(state, payload))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    AuthUser(email): AuthUser,
    Json(payload): Json<CreatePaymentIntentRequest>,
) -> Result<Json<CreatePaymentIntentResponse>, ApiError> {
    if payload.price <= 0 {
        return Err(ApiError::BadRequest("price must be positive".into()));
    }

    let intent = state
        .payments
        .create_payment_intent(amount_minor(payload.price), CURRENCY)
        .await
        .map_err(|e| ApiError::PaymentFailed(e.to_string()))?;

    info!(email = %email, intent_id = %intent.id, "payment intent created");
    Ok(Json(CreatePaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}
