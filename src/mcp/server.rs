//! MCP server exposing the TodoList API as tools.
//!
//! Every tool forwards one HTTP call to the API and hands back whatever the
//! API said. API failures are reported inside the tool result (`is_error`),
//! never as protocol errors, so the calling model can read them.

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use reqwest::RequestBuilder;
use serde_json::{Value, json};
use tracing::{debug, instrument, warn};

use super::client::ApiClient;
use super::error::{ProxyError, ProxyResult};
use super::params::{
    CompleteItemParams, CreateItemParams, CreateListBody, CreateListParams, DeleteItemParams,
    GetItemsParams, ItemBody, UpdateItemParams,
};

const INSTRUCTIONS: &str = "TodoList MCP Server - Manage to-do lists and their items. \
Use get_lists to find list IDs and get_items to find item IDs before changing anything.";

/// Envelope reported in place of a payload when the API call failed.
pub fn error_envelope(error: &ProxyError) -> Value {
    json!({"error": error.to_string()})
}

#[derive(Clone)]
pub struct TodoMcpServer {
    client: ApiClient,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TodoMcpServer {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    /// Get the tool router for this server
    pub fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }

    #[tool(description = "Get all to-do lists with their IDs and names.")]
    pub async fn get_lists(&self) -> Result<CallToolResult, McpError> {
        Ok(self.forward("get_lists", self.client.get("/lists")).await)
    }

    #[tool(description = "Create a new to-do list. List names are unique, ignoring case.")]
    pub async fn create_list(
        &self,
        params: Parameters<CreateListParams>,
    ) -> Result<CallToolResult, McpError> {
        let body = CreateListBody {
            name: &params.0.name,
        };
        let request = self.client.post("/lists").json(&body);
        Ok(self.forward("create_list", request).await)
    }

    #[tool(description = "Get all items of a to-do list.")]
    pub async fn get_items(
        &self,
        params: Parameters<GetItemsParams>,
    ) -> Result<CallToolResult, McpError> {
        let request = self
            .client
            .get(&format!("/lists/{}/items", params.0.list_id));
        Ok(self.forward("get_items", request).await)
    }

    #[tool(
        description = "Add an item to a to-do list. Descriptions are unique within a list, ignoring case."
    )]
    pub async fn create_item(
        &self,
        params: Parameters<CreateItemParams>,
    ) -> Result<CallToolResult, McpError> {
        let body = ItemBody {
            description: Some(&params.0.description),
            completed: params.0.completed,
        };
        let request = self
            .client
            .post(&format!("/lists/{}/items", params.0.list_id))
            .json(&body);
        Ok(self.forward("create_item", request).await)
    }

    #[tool(
        description = "Update an item's description and/or completion state. Only the fields you pass are changed; pass at least one."
    )]
    pub async fn update_item(
        &self,
        params: Parameters<UpdateItemParams>,
    ) -> Result<CallToolResult, McpError> {
        let body = ItemBody {
            description: params.0.description.as_deref(),
            completed: params.0.completed,
        };
        let request = self
            .client
            .put(&format!(
                "/lists/{}/items/{}",
                params.0.list_id, params.0.item_id
            ))
            .json(&body);
        Ok(self.forward("update_item", request).await)
    }

    #[tool(description = "Mark an item as completed.")]
    pub async fn complete_item(
        &self,
        params: Parameters<CompleteItemParams>,
    ) -> Result<CallToolResult, McpError> {
        let request = self.client.patch(&format!(
            "/lists/{}/items/{}/complete",
            params.0.list_id, params.0.item_id
        ));
        Ok(self.forward("complete_item", request).await)
    }

    #[tool(description = "Delete an item from a to-do list.")]
    pub async fn delete_item(
        &self,
        params: Parameters<DeleteItemParams>,
    ) -> Result<CallToolResult, McpError> {
        let request = self.client.delete(&format!(
            "/lists/{}/items/{}",
            params.0.list_id, params.0.item_id
        ));
        Ok(self.forward("delete_item", request).await)
    }

    #[instrument(skip(self, request))]
    async fn forward(&self, tool: &str, request: RequestBuilder) -> CallToolResult {
        debug!(base_url = self.client.base_url(), "forwarding tool call");
        into_tool_result(ApiClient::send(request).await)
    }
}

fn into_tool_result(result: ProxyResult<Value>) -> CallToolResult {
    match result {
        Ok(payload) => CallToolResult::success(vec![Content::text(format!("{payload:#}"))]),
        Err(e) => {
            warn!(error = %e, "API call failed");
            CallToolResult::error(vec![Content::text(format!("{:#}", error_envelope(&e)))])
        }
    }
}

#[tool_handler]
impl ServerHandler for TodoMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info = Implementation::from_build_env();
        info.instructions = Some(INSTRUCTIONS.to_string());
        info
    }
}
