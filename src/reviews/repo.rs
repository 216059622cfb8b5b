use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: Uuid,
    pub reviewer_name: String,
    pub reviewer_email: Option<String>,
    pub rating: i16,
    pub comment: String,
    pub created_at: OffsetDateTime,
}

impl Review {
    pub async fn list_all(db: &PgPool) -> sqlx::Result<Vec<Review>> {
        sqlx::query_as::<_, Review>(
            r#"
            SELECT id, reviewer_name, reviewer_email, rating, comment, created_at
            FROM reviews
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn insert(
        db: &PgPool,
        reviewer_name: &str,
        reviewer_email: Option<&str>,
        rating: i16,
        comment: &str,
    ) -> sqlx::Result<Review> {
        sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (id, reviewer_name, reviewer_email, rating, comment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, reviewer_name, reviewer_email, rating, comment, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(reviewer_name)
        .bind(reviewer_email)
        .bind(rating)
        .bind(comment)
        .fetch_one(db)
        .await
    }
}
