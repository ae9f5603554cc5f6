//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.

use crate::db::{
    DbResult,
    models::{Id, ItemPatch, NewItem, TodoItem, TodoList},
};

/// Repository for TodoList operations.
pub trait ListRepository {
    /// Get all lists in insertion order.
    fn list(&self) -> DbResult<Vec<TodoList>>;

    /// Create a new list. The name is trimmed and must be unique (case-insensitive).
    fn create(&self, name: &str) -> DbResult<TodoList>;
}

/// Repository for TodoItem operations.
///
/// Every operation fails with `DbError::NotFound` when `list_id` does not
/// name an existing list, before any other check runs.
pub trait ItemRepository {
    /// Get all items of a list in insertion order.
    fn list_by_list(&self, list_id: Id) -> DbResult<Vec<TodoItem>>;

    /// Create a new item in a list.
    fn create(&self, list_id: Id, item: &NewItem) -> DbResult<TodoItem>;

    /// Apply a partial update to an item.
    fn update(&self, list_id: Id, item_id: Id, patch: ItemPatch) -> DbResult<TodoItem>;

    /// Mark an item as completed. Idempotent.
    fn complete(&self, list_id: Id, item_id: Id) -> DbResult<TodoItem>;

    /// Delete an item.
    fn delete(&self, list_id: Id, item_id: Id) -> DbResult<()>;
}

/// Combined database interface.
///
/// Repositories are exposed through associated types, avoiding dynamic dispatch.
pub trait Database: Send + Sync {
    type Lists<'a>: ListRepository
    where
        Self: 'a;
    type Items<'a>: ItemRepository
    where
        Self: 'a;

    /// Get the list repository.
    fn lists(&self) -> Self::Lists<'_>;

    /// Get the item repository.
    fn items(&self) -> Self::Items<'_>;
}
