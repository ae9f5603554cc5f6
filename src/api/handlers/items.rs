//! Item management handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use super::{ErrorResponse, HandlerError, map_db_error};
use crate::api::AppState;
use crate::api::extract::{ValidJson, ValidPath, unprocessable};
use crate::db::{Database, ItemPatch, ItemRepository, NewItem, TodoItem};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = 1)]
    pub list_id: u64,
    #[schema(example = "Portátil de 15 pulgadas")]
    pub description: String,
    pub completed: bool,
}

impl From<TodoItem> for ItemResponse {
    fn from(i: TodoItem) -> Self {
        Self {
            id: i.id,
            list_id: i.list_id,
            description: i.description,
            completed: i.completed,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    /// Item description, 3-200 characters after trimming
    #[schema(example = "Comprar frutas y verduras")]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl From<CreateItemRequest> for NewItem {
    fn from(req: CreateItemRequest) -> Self {
        Self {
            description: req.description,
            completed: req.completed,
        }
    }
}

/// Partial update. Omitted fields are left untouched; `null` is rejected.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schema(value_type = Option<String>, example = "Smartphone Android")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schema(value_type = Option<bool>)]
    pub completed: Option<Option<bool>>,
}

impl UpdateItemRequest {
    fn into_patch(self) -> Result<ItemPatch, HandlerError> {
        fn present<T>(field: &str, value: Option<Option<T>>) -> Result<Option<T>, HandlerError> {
            match value {
                Some(None) => Err(unprocessable(format!("{}: may not be null", field))),
                Some(Some(v)) => Ok(Some(v)),
                None => Ok(None),
            }
        }

        Ok(ItemPatch {
            description: present("description", self.description)?,
            completed: present("completed", self.completed)?,
        })
    }
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/lists/{list_id}/items/",
    tag = "items",
    params(("list_id" = u64, Path, description = "List ID")),
    responses(
        (status = 200, description = "Items of the list in creation order", body = [ItemResponse]),
        (status = 404, description = "List not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_items<D: Database>(
    State(state): State<AppState<D>>,
    ValidPath(list_id): ValidPath<u64>,
) -> Result<Json<Vec<ItemResponse>>, HandlerError> {
    let items = state
        .db()
        .items()
        .list_by_list(list_id)
        .map_err(map_db_error)?;

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/lists/{list_id}/items/",
    tag = "items",
    params(("list_id" = u64, Path, description = "List ID")),
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 400, description = "Duplicate description in this list", body = ErrorResponse),
        (status = 404, description = "List not found", body = ErrorResponse),
        (status = 422, description = "Malformed body or description out of bounds", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_item<D: Database>(
    State(state): State<AppState<D>>,
    ValidPath(list_id): ValidPath<u64>,
    ValidJson(req): ValidJson<CreateItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), HandlerError> {
    let item = state
        .db()
        .items()
        .create(list_id, &NewItem::from(req))
        .map_err(map_db_error)?;

    info!(list_id, item_id = item.id, "item created");

    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

#[utoipa::path(
    put,
    path = "/lists/{list_id}/items/{item_id}",
    tag = "items",
    params(
        ("list_id" = u64, Path, description = "List ID"),
        ("item_id" = u64, Path, description = "Item ID")
    ),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated", body = ItemResponse),
        (status = 400, description = "No fields supplied or duplicate description", body = ErrorResponse),
        (status = 404, description = "List or item not found", body = ErrorResponse),
        (status = 422, description = "Malformed body or description out of bounds", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_item<D: Database>(
    State(state): State<AppState<D>>,
    ValidPath((list_id, item_id)): ValidPath<(u64, u64)>,
    ValidJson(req): ValidJson<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, HandlerError> {
    let patch = req.into_patch()?;

    let item = state
        .db()
        .items()
        .update(list_id, item_id, patch)
        .map_err(map_db_error)?;

    Ok(Json(ItemResponse::from(item)))
}

#[utoipa::path(
    patch,
    path = "/lists/{list_id}/items/{item_id}/complete",
    tag = "items",
    params(
        ("list_id" = u64, Path, description = "List ID"),
        ("item_id" = u64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item marked as completed", body = ItemResponse),
        (status = 404, description = "List or item not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn complete_item<D: Database>(
    State(state): State<AppState<D>>,
    ValidPath((list_id, item_id)): ValidPath<(u64, u64)>,
) -> Result<Json<ItemResponse>, HandlerError> {
    let item = state
        .db()
        .items()
        .complete(list_id, item_id)
        .map_err(map_db_error)?;

    Ok(Json(ItemResponse::from(item)))
}

#[utoipa::path(
    delete,
    path = "/lists/{list_id}/items/{item_id}",
    tag = "items",
    params(
        ("list_id" = u64, Path, description = "List ID"),
        ("item_id" = u64, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "List or item not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_item<D: Database>(
    State(state): State<AppState<D>>,
    ValidPath((list_id, item_id)): ValidPath<(u64, u64)>,
) -> Result<StatusCode, HandlerError> {
    state
        .db()
        .items()
        .delete(list_id, item_id)
        .map_err(map_db_error)?;

    info!(list_id, item_id, "item deleted");

    Ok(StatusCode::NO_CONTENT)
}
