use sqlx::PgPool;
use tracing::warn;

use crate::config::AdminLookupMiss;
use crate::errors::ApiError;
use crate::users::repo::UserRecord;

/// Admin role gate.
///
/// The token carries only the email, so the role is re-read from the store on
/// every privileged request; a promotion or demotion applies immediately.
pub async fn require_admin(
    db: &PgPool,
    email: &str,
    on_miss: AdminLookupMiss,
) -> Result<(), ApiError> {
    let requester = UserRecord::find_by_email(db, email).await?;
    if requester.is_none() {
        warn!(email = %email, "admin check for unknown account");
    }
    admin_decision(requester.as_ref(), on_miss)
}

fn admin_decision(
    record: Option<&UserRecord>,
    on_miss: AdminLookupMiss,
) -> Result<(), ApiError> {
    match record {
        None => match on_miss {
            AdminLookupMiss::Forbid => Err(ApiError::Forbidden),
            AdminLookupMiss::NotFound => Err(ApiError::NotFound("account".into())),
        },
        Some(user) if user.is_admin() => Ok(()),
        Some(_) => Err(ApiError::Forbidden),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn record(role: Option<&str>) -> UserRecord {
        UserRecord {
            email: "alice@example.com".into(),
            name: Some("Alice".into()),
            role: role.map(|r| r.to_string()),
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn admin_record_is_authorized() {
        let user = record(Some("admin"));
        assert!(admin_decision(Some(&user), AdminLookupMiss::Forbid).is_ok());
    }

    #[test]
    fn non_admin_record_is_forbidden() {
        let user = record(None);
        let err = admin_decision(Some(&user), AdminLookupMiss::Forbid).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden));

        let user = record(Some("user"));
        let err = admin_decision(Some(&user), AdminLookupMiss::Forbid).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden));
    }

    #[test]
    fn missing_record_follows_configured_policy() {
        let err = admin_decision(None, AdminLookupMiss::Forbid).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden));

        let err = admin_decision(None, AdminLookupMiss::NotFound).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
