//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text rejections, so malformed input gets the standard JSON error
//! body and a 400 status.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use storefront_core::error::CoreError;
use storefront_core::types::{parse_db_id, DbId};

use crate::error::AppError;

/// JSON body extractor.
///
/// Decodes the raw body regardless of `Content-Type`. A body that cannot be
/// read, is not valid JSON, or has a field of the wrong type becomes a
/// validation error.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| CoreError::Validation(rejection.body_text()))?;
        let value = serde_json::from_slice(&bytes)
            .map_err(|err| CoreError::Validation(err.to_string()))?;
        Ok(JsonBody(value))
    }
}

/// Single `{id}` path parameter identifying a product.
pub struct ProductId(pub DbId);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| CoreError::Validation(rejection.body_text()))?;
        Ok(ProductId(parse_db_id("product", &raw)?))
    }
}
