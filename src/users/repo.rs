use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

pub const ROLE_ADMIN: &str = "admin";

/// User record in the database. The role column is NULL for regular users.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub email: String,
    pub name: Option<String>,
    pub role: Option<String>,
    pub created_at: OffsetDateTime,
}

impl UserRecord {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ROLE_ADMIN)
    }

    pub async fn find_by_email(db: &PgPool, email: &str) -> sqlx::Result<Option<UserRecord>> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT email, name, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    pub async fn list_all(db: &PgPool) -> sqlx::Result<Vec<UserRecord>> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT email, name, role, created_at
            FROM users
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(db)
        .await
    }

    /// Insert-or-update by email. A NULL incoming name keeps the stored one.
    pub async fn upsert(
        db: &PgPool,
        email: &str,
        name: Option<&str>,
    ) -> sqlx::Result<UserRecord> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (email, name)
            VALUES ($1, $2)
            ON CONFLICT (email)
            DO UPDATE SET name = COALESCE(EXCLUDED.name, users.name)
            RETURNING email, name, role, created_at
            "#,
        )
        .bind(email)
        .bind(name)
        .fetch_one(db)
        .await
    }

    /// Set the target's role to admin. Idempotent; `None` when no such user.
    pub async fn promote_to_admin(db: &PgPool, email: &str) -> sqlx::Result<Option<UserRecord>> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            UPDATE users
            SET role = $2
            WHERE email = $1
            RETURNING email, name, role, created_at
            "#,
        )
        .bind(email)
        .bind(ROLE_ADMIN)
        .fetch_optional(db)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_admin_checks_role_value() {
        let admin = UserRecord {
            email: "a@example.com".into(),
            name: None,
            role: Some(ROLE_ADMIN.into()),
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        assert!(admin.is_admin());

        let plain = UserRecord {
            role: None,
            ..admin.clone()
        };
        assert!(!plain.is_admin());

        let other = UserRecord {
            role: Some("user".into()),
            ..admin
        };
        assert!(!other.is_admin());
    }
}
