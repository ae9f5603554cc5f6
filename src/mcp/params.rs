//! Tool parameters and the request bodies built from them.

use rmcp::{schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateListParams {
    #[schemars(description = "Name of the new list (1-50 characters, unique ignoring case)")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetItemsParams {
    #[schemars(description = "ID of the list whose items to fetch")]
    pub list_id: u64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateItemParams {
    #[schemars(description = "ID of the list to add the item to")]
    pub list_id: u64,
    #[schemars(
        description = "What needs to be done (3-200 characters, unique in the list ignoring case)"
    )]
    pub description: String,
    #[schemars(description = "Whether the item starts completed (default: false)")]
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateItemParams {
    #[schemars(description = "ID of the list that holds the item")]
    pub list_id: u64,
    #[schemars(description = "ID of the item to update")]
    pub item_id: u64,
    #[schemars(description = "New description. Omit to keep the current one.")]
    pub description: Option<String>,
    #[schemars(description = "New completion state. Omit to keep the current one.")]
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CompleteItemParams {
    #[schemars(description = "ID of the list that holds the item")]
    pub list_id: u64,
    #[schemars(description = "ID of the item to mark as completed")]
    pub item_id: u64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteItemParams {
    #[schemars(description = "ID of the list that holds the item")]
    pub list_id: u64,
    #[schemars(description = "ID of the item to delete")]
    pub item_id: u64,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateListBody<'a> {
    pub name: &'a str,
}

/// Fields left `None` are not sent, so the API keeps its own defaults.
#[derive(Debug, Serialize)]
pub(crate) struct ItemBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}
