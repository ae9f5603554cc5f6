//! Domain models for the to-do stores.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use serde::{Deserialize, Serialize};

use crate::db::{DbError, DbResult};

// =============================================================================
// Field Bounds
// =============================================================================

/// Allowed length of a trimmed list name, in characters.
pub const LIST_NAME_LEN: (usize, usize) = (1, 50);

/// Allowed length of a trimmed item description, in characters.
pub const DESCRIPTION_LEN: (usize, usize) = (3, 200);

/// Integer ID type used for all entities.
pub type Id = u64;

// =============================================================================
// Entities
// =============================================================================

/// A named container of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: Id,
    pub name: String,
}

/// A to-do entry belonging to exactly one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: Id,
    pub list_id: Id,
    pub description: String,
    pub completed: bool,
}

/// Payload for creating an item. The store assigns `id` and `list_id`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewItem {
    pub description: String,
    pub completed: bool,
}

impl NewItem {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
        }
    }
}

/// Partial update for an item.
///
/// `None` means the field was not supplied and stays untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemPatch {
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.completed.is_none()
    }

    fn merge_into(self, target: &mut TodoItem) {
        if let Some(description) = self.description {
            target.description = description;
        }
        if let Some(completed) = self.completed {
            target.completed = completed;
        }
    }
}

impl TodoItem {
    /// Apply an already-normalized patch.
    pub(crate) fn apply(&mut self, patch: ItemPatch) {
        patch.merge_into(self);
    }
}

// =============================================================================
// Normalization
// =============================================================================

fn normalize_field(field: &str, value: &str, (min, max): (usize, usize)) -> DbResult<String> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if len < min || len > max {
        return Err(DbError::Validation {
            field: field.to_string(),
            message: format!("must be between {} and {} characters", min, max),
        });
    }
    Ok(trimmed.to_string())
}

/// Trim a list name and check its length bounds.
pub fn normalize_list_name(name: &str) -> DbResult<String> {
    normalize_field("name", name, LIST_NAME_LEN)
}

/// Trim an item description and check its length bounds.
pub fn normalize_description(description: &str) -> DbResult<String> {
    normalize_field("description", description, DESCRIPTION_LEN)
}

/// Case-insensitive comparison of two already-trimmed values.
pub fn same_text(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
