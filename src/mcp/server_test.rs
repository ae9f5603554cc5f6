//! Tests for the MCP tools, each forwarding to a live in-process API.

use rmcp::ServerHandler;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, RawContent};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use super::client::ApiClient;
use super::params::*;
use super::server::TodoMcpServer;
use crate::api::{AppState, routes};
use crate::db::MemoryDatabase;

async fn spawn_server(db: MemoryDatabase) -> TodoMcpServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = routes::create_router(AppState::new(db));
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    TodoMcpServer::new(ApiClient::new(Some(format!("http://{addr}"))).unwrap())
}

async fn demo_server() -> TodoMcpServer {
    spawn_server(MemoryDatabase::with_demo_data()).await
}

fn text(result: &CallToolResult) -> Value {
    let content_text = match &result.content[0].raw {
        RawContent::Text(text) => text.text.as_str(),
        _ => panic!("Expected text content"),
    };
    serde_json::from_str(content_text).unwrap()
}

fn is_error(result: &CallToolResult) -> bool {
    result.is_error.unwrap_or(false)
}

#[tokio::test]
async fn test_get_info_enables_tools() {
    let server = demo_server().await;
    let info = server.get_info();
    assert!(info.capabilities.tools.is_some());
    assert!(info.instructions.unwrap().contains("get_lists"));
}

#[tokio::test]
async fn test_router_lists_every_tool() {
    let server = demo_server().await;
    let mut names: Vec<String> = server
        .router()
        .list_all()
        .into_iter()
        .map(|tool| tool.name.to_string())
        .collect();
    names.sort();
    assert_eq!(
        names,
        [
            "complete_item",
            "create_item",
            "create_list",
            "delete_item",
            "get_items",
            "get_lists",
            "update_item"
        ]
    );
}

#[tokio::test]
async fn test_get_lists() {
    let server = demo_server().await;
    let result = server.get_lists().await.unwrap();

    assert!(!is_error(&result));
    assert_eq!(
        text(&result),
        json!([{"id": 1, "name": "Trabajo"}, {"id": 2, "name": "Casa"}])
    );
}

#[tokio::test]
async fn test_create_list_and_duplicate() {
    let server = demo_server().await;

    let created = server
        .create_list(Parameters(CreateListParams {
            name: "  Compras ".to_string(),
        }))
        .await
        .unwrap();
    assert!(!is_error(&created));
    assert_eq!(text(&created), json!({"id": 3, "name": "Compras"}));

    let duplicate = server
        .create_list(Parameters(CreateListParams {
            name: "COMPRAS".to_string(),
        }))
        .await
        .unwrap();
    assert!(is_error(&duplicate));
    let error = text(&duplicate)["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("Error 400: "), "{error}");
    assert!(error.contains("A list with this name already exists"));
}

#[tokio::test]
async fn test_get_items_missing_list_is_error_envelope() {
    let server = demo_server().await;

    let result = server
        .get_items(Parameters(GetItemsParams { list_id: 99 }))
        .await
        .unwrap();
    assert!(is_error(&result));
    let error = text(&result)["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("Error 404: "), "{error}");
    assert!(error.contains("List with ID 99 not found"));
}

#[tokio::test]
async fn test_create_item_defaults_to_not_completed() {
    let server = demo_server().await;

    let result = server
        .create_item(Parameters(CreateItemParams {
            list_id: 2,
            description: "Regar las plantas".to_string(),
            completed: None,
        }))
        .await
        .unwrap();
    assert!(!is_error(&result));
    assert_eq!(
        text(&result),
        json!({"id": 5, "list_id": 2, "description": "Regar las plantas", "completed": false})
    );
}

#[tokio::test]
async fn test_create_item_validation_error_passes_through() {
    let server = demo_server().await;

    let result = server
        .create_item(Parameters(CreateItemParams {
            list_id: 1,
            description: "ab".to_string(),
            completed: Some(true),
        }))
        .await
        .unwrap();
    assert!(is_error(&result));
    let error = text(&result)["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("Error 422: "), "{error}");
}

#[tokio::test]
async fn test_update_item_sends_only_supplied_fields() {
    let server = demo_server().await;

    let result = server
        .update_item(Parameters(UpdateItemParams {
            list_id: 1,
            item_id: 2,
            description: None,
            completed: Some(false),
        }))
        .await
        .unwrap();
    assert!(!is_error(&result));
    assert_eq!(
        text(&result),
        json!({"id": 2, "list_id": 1, "description": "Smartphone Android", "completed": false})
    );
}

#[tokio::test]
async fn test_update_item_without_fields_is_rejected_by_api() {
    let server = demo_server().await;

    let result = server
        .update_item(Parameters(UpdateItemParams {
            list_id: 1,
            item_id: 1,
            description: None,
            completed: None,
        }))
        .await
        .unwrap();
    assert!(is_error(&result));
    let error = text(&result)["error"].as_str().unwrap().to_string();
    assert!(error.contains("At least one field must be provided for update"));
}

#[tokio::test]
async fn test_complete_and_delete_item() {
    let server = demo_server().await;
    let (list_id, item_id) = (2, 3);

    let completed = server
        .complete_item(Parameters(CompleteItemParams { list_id, item_id }))
        .await
        .unwrap();
    assert_eq!(text(&completed)["completed"], json!(true));

    let deleted = server
        .delete_item(Parameters(DeleteItemParams { list_id, item_id }))
        .await
        .unwrap();
    assert!(!is_error(&deleted));
    assert_eq!(
        text(&deleted),
        json!({"message": "operation successful", "status": "success"})
    );

    let again = server
        .delete_item(Parameters(DeleteItemParams { list_id, item_id }))
        .await
        .unwrap();
    assert!(is_error(&again));
    assert!(
        text(&again)["error"]
            .as_str()
            .unwrap()
            .contains("Item with ID 3 not found in list 2")
    );
}

#[tokio::test]
async fn test_unreachable_api_is_error_envelope() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let server = TodoMcpServer::new(ApiClient::new(Some(format!("http://{addr}"))).unwrap());

    let result = server.get_lists().await.unwrap();
    assert!(is_error(&result));
    assert!(
        text(&result)["error"]
            .as_str()
            .unwrap()
            .starts_with("Failed to connect to API server")
    );
}

#[tokio::test]
async fn test_empty_store_walkthrough() {
    let server = spawn_server(MemoryDatabase::new()).await;

    assert_eq!(text(&server.get_lists().await.unwrap()), json!([]));

    let list = text(
        &server
            .create_list(Parameters(CreateListParams {
                name: "Viaje".to_string(),
            }))
            .await
            .unwrap(),
    );
    assert_eq!(list, json!({"id": 1, "name": "Viaje"}));

    let item = text(
        &server
            .create_item(Parameters(CreateItemParams {
                list_id: 1,
                description: "Reservar hotel".to_string(),
                completed: None,
            }))
            .await
            .unwrap(),
    );
    assert_eq!(item["id"], json!(1));

    let items = text(
        &server
            .get_items(Parameters(GetItemsParams { list_id: 1 }))
            .await
            .unwrap(),
    );
    assert_eq!(items.as_array().unwrap().len(), 1);
}
