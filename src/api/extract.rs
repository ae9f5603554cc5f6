//! Extractors that report malformed requests as `422 {detail}`.
//!
//! axum's own `Json` and `Path` extractors answer with a mix of 400, 415
//! and 422 and a plain-text body. These wrap them so every shape violation
//! comes back as 422 with the JSON error body used for store errors.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::handlers::{ErrorResponse, HandlerError};

/// Build a 422 response with the given detail.
pub(crate) fn unprocessable(detail: impl Into<String>) -> HandlerError {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
}

/// JSON body extractor.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = HandlerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                debug!(status = %rejection.status(), "rejected request body");
                unprocessable(rejection.body_text())
            })?;
        Ok(Self(value))
    }
}

/// Path parameter extractor.
#[derive(Debug)]
pub struct ValidPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HandlerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| unprocessable(rejection.body_text()))?;
        Ok(Self(value))
    }
}
