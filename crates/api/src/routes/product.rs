//! Route definitions for the `/products` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Product routes, mounted at the root.
///
/// ```text
/// GET    /products         -> list
/// POST   /products         -> create
/// PUT    /products/{id}    -> update
/// PATCH  /products/{id}    -> update
/// DELETE /products/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(product::list).post(product::create))
        .route(
            "/products/{id}",
            put(product::update)
                .patch(product::update)
                .delete(product::delete),
        )
}
