use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Profile fields upserted on login.
#[derive(Debug, Deserialize)]
pub struct UpsertUserRequest {
    pub name: Option<String>,
}

/// Public part of a user returned to clients.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub email: String,
    pub name: Option<String>,
    pub role: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Response for `PUT /user/:email`: the upserted profile plus a fresh token.
#[derive(Debug, Serialize)]
pub struct UpsertUserResponse {
    pub result: PublicUser,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct AdminFlagResponse {
    pub admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_flag_serializes_admin_key() {
        let json = serde_json::to_string(&AdminFlagResponse { admin: true }).unwrap();
        assert_eq!(json, r#"{"admin":true}"#);
    }

    #[test]
    fn public_user_serializes_email_and_role() {
        let user = PublicUser {
            email: "alice@example.com".into(),
            name: None,
            role: Some("admin".into()),
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("alice@example.com"));
        assert!(json.contains("admin"));
    }
}
