//! The storage seam between HTTP handlers and the database.
//!
//! Handlers receive an `Arc<dyn ProductStore>` through application state, so
//! the PostgreSQL implementation can be swapped for an in-memory one in tests.

use async_trait::async_trait;
use storefront_core::types::DbId;

use crate::models::product::{Product, ProductInput};
use crate::repositories::ProductRepo;
use crate::DbPool;

/// One method per product operation, plus a liveness probe.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn create(&self, input: &ProductInput) -> Result<DbId, sqlx::Error>;

    async fn list(&self) -> Result<Vec<Product>, sqlx::Error>;

    /// Returns rows affected.
    async fn update(&self, id: DbId, input: &ProductInput) -> Result<u64, sqlx::Error>;

    /// Returns rows affected.
    async fn delete(&self, id: DbId) -> Result<u64, sqlx::Error>;

    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// [`ProductStore`] backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgProductStore {
    pool: DbPool,
}

impl PgProductStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn create(&self, input: &ProductInput) -> Result<DbId, sqlx::Error> {
        ProductRepo::create(&self.pool, input).await
    }

    async fn list(&self) -> Result<Vec<Product>, sqlx::Error> {
        ProductRepo::list(&self.pool).await
    }

    async fn update(&self, id: DbId, input: &ProductInput) -> Result<u64, sqlx::Error> {
        ProductRepo::update(&self.pool, id, input).await
    }

    async fn delete(&self, id: DbId) -> Result<u64, sqlx::Error> {
        ProductRepo::delete(&self.pool, id).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
