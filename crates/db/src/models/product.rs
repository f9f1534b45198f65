//! Product model and DTOs.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use storefront_core::types::DbId;

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Request body for both create and update.
///
/// Update is a full overwrite, so the same shape serves both. A missing or
/// `null` field binds to its zero value (`""` or `0.0`); only a wrong JSON
/// type is rejected. Unknown fields (including a client-supplied `id`) are
/// ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductInput {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
}

/// Echo returned by create and update. Never carries `price`.
#[derive(Debug, Clone, Serialize)]
pub struct ProductSummary {
    pub id: DbId,
    pub name: String,
    pub description: String,
}

impl ProductSummary {
    pub fn new(id: DbId, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
