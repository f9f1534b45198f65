//! Handlers for the `/products` resource.
//!
//! Each handler issues exactly one storage call. Update and delete do not
//! check existence first: a missing id is a successful no-op.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use storefront_db::models::product::{Product, ProductInput, ProductSummary};

use crate::error::AppResult;
use crate::extract::{JsonBody, ProductId};
use crate::response::{MessageResponse, StatusResponse};
use crate::state::AppState;

/// POST /products
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ProductInput>,
) -> AppResult<(StatusCode, Json<ProductSummary>)> {
    let id = state.store.create(&input).await?;

    tracing::info!(product_id = id, "Product created");

    Ok((StatusCode::CREATED, Json(ProductSummary::new(id, input))))
}

/// GET /products
pub async fn list(State(state): State<AppState>) -> AppResult<Json<StatusResponse<Vec<Product>>>> {
    let products = state.store.list().await?;
    Ok(Json(StatusResponse::success(products)))
}

/// PUT /products/{id}
/// PATCH /products/{id}
///
/// Full overwrite; PATCH is accepted as an alias, not a partial update.
pub async fn update(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    JsonBody(input): JsonBody<ProductInput>,
) -> AppResult<Json<StatusResponse<ProductSummary>>> {
    let affected = state.store.update(id, &input).await?;

    if affected == 0 {
        tracing::debug!(product_id = id, "Update matched no product");
    } else {
        tracing::info!(product_id = id, "Product updated");
    }

    Ok(Json(StatusResponse::success(ProductSummary::new(id, input))))
}

/// DELETE /products/{id}
pub async fn delete(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<Json<MessageResponse>> {
    let affected = state.store.delete(id).await?;

    tracing::info!(product_id = id, affected, "Product delete processed");

    Ok(Json(MessageResponse {
        message: "Product deleted",
    }))
}
