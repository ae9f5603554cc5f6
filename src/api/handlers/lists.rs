//! List management handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use super::{ErrorResponse, HandlerError, map_db_error};
use crate::api::AppState;
use crate::api::extract::ValidJson;
use crate::db::{Database, ListRepository, TodoList};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListResponse {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Trabajo")]
    pub name: String,
}

impl From<TodoList> for ListResponse {
    fn from(l: TodoList) -> Self {
        Self {
            id: l.id,
            name: l.name,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateListRequest {
    /// List name, 1-50 characters after trimming
    #[schema(example = "Trabajo")]
    pub name: String,
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/lists/",
    tag = "lists",
    responses(
        (status = 200, description = "All lists in creation order", body = [ListResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_lists<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<ListResponse>>, HandlerError> {
    let lists = state.db().lists().list().map_err(map_db_error)?;

    Ok(Json(lists.into_iter().map(ListResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/lists/",
    tag = "lists",
    request_body = CreateListRequest,
    responses(
        (status = 201, description = "List created", body = ListResponse),
        (status = 400, description = "A list with this name already exists", body = ErrorResponse),
        (status = 422, description = "Malformed body or name out of bounds", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_list<D: Database>(
    State(state): State<AppState<D>>,
    ValidJson(req): ValidJson<CreateListRequest>,
) -> Result<(StatusCode, Json<ListResponse>), HandlerError> {
    let list = state
        .db()
        .lists()
        .create(&req.name)
        .map_err(map_db_error)?;

    info!(list_id = list.id, "list created");

    Ok((StatusCode::CREATED, Json(ListResponse::from(list))))
}
