use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, instrument};

use crate::errors::ApiError;
use crate::state::AppState;

use super::dto::CreateReviewRequest;
use super::repo::Review;

#[instrument(skip(state))]
pub async fn list_reviews(State(state): State<AppState>) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = Review::list_all(&state.db).await?;
    Ok(Json(reviews))
}

#[instrument(skip(state, payload))]
pub async fn create_review(
    State(state): State<AppState>,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    if payload.reviewer_name.trim().is_empty() {
        return Err(ApiError::BadRequest("reviewer_name is required".into()));
    }
    if !(1..=5).contains(&payload.rating) {
        return Err(ApiError::BadRequest("rating must be between 1 and 5".into()));
    }

    let review = Review::insert(
        &state.db,
        payload.reviewer_name.trim(),
        payload.reviewer_email.as_deref(),
        payload.rating,
        &payload.comment,
    )
    .await?;

    info!(review_id = %review.id, "review created");
    Ok((StatusCode::CREATED, Json(review)))
}
