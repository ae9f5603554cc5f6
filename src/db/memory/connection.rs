//! In-memory database construction.

use std::sync::Mutex;

use super::{MemoryItemRepository, MemoryListRepository};
use crate::db::{Database, TodoItem, TodoList};

/// In-memory database implementation.
///
/// Built once at process start and injected into the API layer. Nothing
/// survives a restart.
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    lists: Mutex<Vec<TodoList>>,
    items: Mutex<Vec<TodoItem>>,
}

impl MemoryDatabase {
    /// Create empty stores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create stores pre-populated with the given rows, kept in order.
    pub fn with_rows(lists: Vec<TodoList>, items: Vec<TodoItem>) -> Self {
        Self {
            lists: Mutex::new(lists),
            items: Mutex::new(items),
        }
    }

    /// Create stores holding the demo data the service ships with.
    pub fn with_demo_data() -> Self {
        let list = |id, name: &str| TodoList {
            id,
            name: name.to_string(),
        };
        let item = |id, list_id, description: &str, completed| TodoItem {
            id,
            list_id,
            description: description.to_string(),
            completed,
        };

        Self::with_rows(
            vec![list(1, "Trabajo"), list(2, "Casa")],
            vec![
                item(1, 1, "Portátil de 15 pulgadas", false),
                item(2, 1, "Smartphone Android", true),
                item(3, 2, "Lavar los platos de la cena", false),
                item(4, 2, "Comprar frutas y verduras", true),
            ],
        )
    }
}

impl Database for MemoryDatabase {
    type Lists<'a> = MemoryListRepository<'a>;
    type Items<'a> = MemoryItemRepository<'a>;

    fn lists(&self) -> Self::Lists<'_> {
        MemoryListRepository {
            lists: &self.lists,
        }
    }

    fn items(&self) -> Self::Items<'_> {
        MemoryItemRepository {
            lists: &self.lists,
            items: &self.items,
        }
    }
}
