use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::state::AppState;

use super::dto::CreateProductRequest;
use super::repo::Product;

#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = Product::list_all(&state.db).await?;
    Ok(Json(products))
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, ApiError> {
    let product = Product::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("product".into()))?;
    Ok(Json(product))
}

#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::BadRequest("name is required".into()));
    }
    if payload.price < 0 {
        return Err(ApiError::BadRequest("price must not be negative".into()));
    }

    let product = Product::insert(
        &state.db,
        payload.name.trim(),
        &payload.description,
        payload.image_url.as_deref(),
        payload.price,
        payload.min_order_qty,
        payload.available_qty,
    )
    .await?;

    info!(product_id = %product.id, name = %product.name, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}
