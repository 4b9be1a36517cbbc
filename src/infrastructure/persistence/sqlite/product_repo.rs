//! SQLite Product Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;
use crate::application::ports::{ProductRecord, ProductRepositoryPort, RepositoryError};

/// SQLite Product Repository
pub struct SqliteProductRepository {
    pool: DbPool,
}

impl SqliteProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ProductRow {
    id: String,
    name: String,
    name_ar: String,
    description: Option<String>,
    description_ar: Option<String>,
    price: f64,
    category: Option<String>,
    images: String,
    stock: i64,
    created_at: String,
}

impl TryFrom<ProductRow> for ProductRecord {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(ProductRecord {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            name: row.name,
            name_ar: row.name_ar,
            description: row.description,
            description_ar: row.description_ar,
            price: row.price,
            category: row.category,
            images: serde_json::from_str(&row.images)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            stock: row.stock,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

const SELECT_COLUMNS: &str = "SELECT id, name, name_ar, description, description_ar, price, category, images, stock, created_at FROM products";

#[async_trait]
impl ProductRepositoryPort for SqliteProductRepository {
    async fn save(&self, product: &ProductRecord) -> Result<(), RepositoryError> {
        let images = serde_json::to_string(&product.images)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO products (id, name, name_ar, description, description_ar, price, category, images, stock, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                name_ar = excluded.name_ar,
                description = excluded.description,
                description_ar = excluded.description_ar,
                price = excluded.price,
                category = excluded.category,
                images = excluded.images,
                stock = excluded.stock
            "#,
        )
        .bind(product.id.to_string())
        .bind(&product.name)
        .bind(&product.name_ar)
        .bind(&product.description)
        .bind(&product.description_ar)
        .bind(product.price)
        .bind(&product.category)
        .bind(images)
        .bind(product.stock)
        .bind(product.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductRecord>, RepositoryError> {
        let row: Option<ProductRow> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(ProductRecord::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<ProductRecord>, RepositoryError> {
        let rows: Vec<ProductRow> =
            sqlx::query_as(&format!("{} ORDER BY created_at DESC", SELECT_COLUMNS))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(ProductRecord::try_from).collect()
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
