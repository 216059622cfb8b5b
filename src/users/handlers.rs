use axum::{
    extract::{FromRef, Path, State},
    Json,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument};

use crate::auth::guard::require_admin;
use crate::auth::jwt::{AuthUser, JwtKeys};
use crate::errors::ApiError;
use crate::state::AppState;

use super::dto::{AdminFlagResponse, PublicUser, UpsertUserRequest, UpsertUserResponse};
use super::repo::UserRecord;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn public(user: UserRecord) -> PublicUser {
    PublicUser {
        email: user.email,
        name: user.name,
        role: user.role,
        created_at: user.created_at,
    }
}

/// `PUT /user/:email` — upsert the profile and issue a fresh token.
///
/// The email arrives already authenticated by the external identity
/// mechanism; this is the only place tokens are minted.
#[instrument(skip(state, payload))]
pub async fn upsert_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<UpsertUserRequest>,
) -> Result<Json<UpsertUserResponse>, ApiError> {
    let email = email.trim().to_lowercase();
    if !is_valid_email(&email) {
        return Err(ApiError::BadRequest("Invalid email".into()));
    }

    let user = UserRecord::upsert(&state.db, &email, payload.name.as_deref()).await?;

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(&user.email)?;

    info!(email = %user.email, "user upserted, token issued");
    Ok(Json(UpsertUserResponse {
        result: public(user),
        token,
    }))
}

/// `GET /users` — token-gated listing of all users.
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    AuthUser(_requester): AuthUser,
) -> Result<Json<Vec<PublicUser>>, ApiError> {
    let users = UserRecord::list_all(&state.db).await?;
    Ok(Json(users.into_iter().map(public).collect()))
}

/// `GET /admin/:email` — whether the given email holds the admin role.
/// An unknown email is simply not an admin.
#[instrument(skip(state))]
pub async fn admin_flag(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<AdminFlagResponse>, ApiError> {
    let user = UserRecord::find_by_email(&state.db, &email).await?;
    let admin = user.map(|u| u.is_admin()).unwrap_or(false);
    Ok(Json(AdminFlagResponse { admin }))
}

/// `PUT /user/admin/:email` — promote the target to admin.
///
/// Token gate via the extractor, then the requester's stored role is
/// re-checked before the mutation. Promotion is idempotent.
#[instrument(skip(state))]
pub async fn promote_admin(
    State(state): State<AppState>,
    AuthUser(requester): AuthUser,
    Path(email): Path<String>,
) -> Result<Json<PublicUser>, ApiError> {
    require_admin(&state.db, &requester, state.config.admin_lookup_miss).await?;

    let target = email.trim().to_lowercase();
    let updated = UserRecord::promote_to_admin(&state.db, &target)
        .await?
        .ok_or_else(|| ApiError::NotFound("user".into()))?;

    info!(requester = %requester, target = %updated.email, "user promoted to admin");
    Ok(Json(public(updated)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation_accepts_plain_addresses() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("bob.smith@sub.example.co"));
    }

    #[test]
    fn email_validation_rejects_malformed_input() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
    }
}
