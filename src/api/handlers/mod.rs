//! HTTP handlers.
//!
//! Store errors are translated to status codes here and nowhere else.

mod items;
mod lists;
mod system;

#[cfg(test)]
mod lists_test;

use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::db::DbError;

pub use items::*;
pub use lists::*;
pub use system::*;

/// Error response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "List with ID 999 not found")]
    pub detail: String,
}

/// Error half of every handler result.
pub type HandlerError = (StatusCode, Json<ErrorResponse>);

/// Map a store error onto its HTTP status.
pub(crate) fn map_db_error(e: DbError) -> HandlerError {
    let status = match &e {
        DbError::NotFound { .. } => StatusCode::NOT_FOUND,
        DbError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        DbError::Conflict { .. } | DbError::EmptyUpdate => StatusCode::BAD_REQUEST,
        DbError::Database { .. } => {
            error!(error = %e, "store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ErrorResponse {
            detail: e.to_string(),
        }),
    )
}
