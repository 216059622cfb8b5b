use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error type.
///
/// Maps to HTTP status codes via `IntoResponse`:
/// - Unauthorized: 401
/// - Forbidden: 403
/// - NotFound: 404
/// - BadRequest: 400
/// - PaymentFailed: 502
/// - Database, Internal: 500
///
/// Gate failures (401/403) use the fixed wire message the clients expect.
/// Database and internal errors are logged server-side and return a generic
/// message to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("{0} not found")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("payment processor error: {0}")]
    PaymentFailed(String),

    #[error("database error")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "UnAuthorized Access".to_string())
            }
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "UnAuthorized Access".to_string()),
            ApiError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{what} not found")),
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::PaymentFailed(reason) => {
                tracing::error!(error = %reason, "payment intent creation failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Payment processor is unavailable".to_string(),
                )
            }
            ApiError::Database(err) => {
                tracing::error!(error = %err, "database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_failures_map_to_401_and_403() {
        let unauthorized = ApiError::Unauthorized.into_response();
        assert_eq!(unauthorized.status(), StatusCode::UNAUTHORIZED);

        let forbidden = ApiError::Forbidden.into_response();
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn error_body_serializes_message_key() {
        let body = ErrorBody {
            message: "UnAuthorized Access".into(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"message":"UnAuthorized Access"}"#);
    }

    #[test]
    fn not_found_names_the_resource() {
        let res = ApiError::NotFound("user".into()).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
