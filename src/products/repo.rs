use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub price: i64,
    pub min_order_qty: i64,
    pub available_qty: i64,
    pub created_at: OffsetDateTime,
}

impl Product {
    pub async fn list_all(db: &PgPool) -> sqlx::Result<Vec<Product>> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, image_url, price, min_order_qty, available_qty, created_at
            FROM products
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<Product>> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, image_url, price, min_order_qty, available_qty, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn insert(
        db: &PgPool,
        name: &str,
        description: &str,
        image_url: Option<&str>,
        price: i64,
        min_order_qty: i64,
        available_qty: i64,
    ) -> sqlx::Result<Product> {
        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (id, name, description, image_url, price, min_order_qty, available_qty)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, description, image_url, price, min_order_qty, available_qty, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(description)
        .bind(image_url)
        .bind(price)
        .bind(min_order_qty)
        .bind(available_qty)
        .fetch_one(db)
        .await
    }
}
