//! Repository for the `products` table.

use sqlx::PgPool;
use storefront_core::types::DbId;

use crate::models::product::{Product, ProductInput};

/// Column list for `products` queries.
const COLUMNS: &str = "id, name, description, price";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a product, returning the id assigned by the database.
    pub async fn create(pool: &PgPool, input: &ProductInput) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO products (name, description, price) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .fetch_one(pool)
        .await
    }

    /// List every product ordered by id.
    ///
    /// A row that fails to decode fails the whole call.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Overwrite every column of the product with the given id.
    ///
    /// Returns the number of rows affected; zero means no such product and
    /// is not treated as an error.
    pub async fn update(pool: &PgPool, id: DbId, input: &ProductInput) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE products SET name = $1, description = $2, price = $3 \
             WHERE id = $4",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete the product with the given id. Returns the number of rows removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
