//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, patch, post, put};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, CreateItemRequest, CreateListRequest, ErrorResponse, HealthResponse, ItemResponse,
    ListResponse, UpdateItemRequest,
};
use super::state::AppState;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TodoList API",
        version = "0.1.0",
        description = "Lists and to-do items kept in memory",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::root,
        handlers::health,
        handlers::list_lists,
        handlers::create_list,
        handlers::list_items,
        handlers::create_item,
        handlers::update_item,
        handlers::complete_item,
        handlers::delete_item,
    ),
    components(
        schemas(
            HealthResponse,
            ListResponse,
            CreateListRequest,
            ItemResponse,
            CreateItemRequest,
            UpdateItemRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "lists", description = "List management endpoints"),
        (name = "items", description = "Item management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
///
/// Collection paths answer both with and without the trailing slash.
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health));

    let list_routes = routes!(D => {
        get "/lists" => handlers::list_lists,
        get "/lists/" => handlers::list_lists,
        post "/lists" => handlers::create_list,
        post "/lists/" => handlers::create_list,
    });

    let item_routes = routes!(D => {
        get "/lists/{list_id}/items" => handlers::list_items,
        get "/lists/{list_id}/items/" => handlers::list_items,
        post "/lists/{list_id}/items" => handlers::create_item,
        post "/lists/{list_id}/items/" => handlers::create_item,
        put "/lists/{list_id}/items/{item_id}" => handlers::update_item,
        delete "/lists/{list_id}/items/{item_id}" => handlers::delete_item,
        patch "/lists/{list_id}/items/{item_id}/complete" => handlers::complete_item,
    });

    system_routes
        .merge(list_routes)
        .merge(item_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
