use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: Uuid,
    pub user_email: String,
    pub product_name: String,
    pub quantity: i64,
    pub price: i64,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub created_at: OffsetDateTime,
}

impl Order {
    pub async fn list_by_email(db: &PgPool, email: &str) -> sqlx::Result<Vec<Order>> {
        sqlx::query_as::<_, Order>(
            r#"
            SELECT id, user_email, product_name, quantity, price, address, phone, created_at
            FROM orders
            WHERE user_email = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(email)
        .fetch_all(db)
        .await
    }

    pub async fn insert(
        db: &PgPool,
        user_email: &str,
        product_name: &str,
        quantity: i64,
        price: i64,
        address: Option<&str>,
        phone: Option<&str>,
    ) -> sqlx::Result<Order> {
        sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (id, user_email, product_name, quantity, price, address, phone)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_email, product_name, quantity, price, address, phone, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_email)
        .bind(product_name)
        .bind(quantity)
        .bind(price)
        .bind(address)
        .bind(phone)
        .fetch_one(db)
        .await
    }

    /// Delete by id; true when a row was removed.
    pub async fn delete_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
