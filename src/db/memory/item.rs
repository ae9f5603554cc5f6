//! In-memory ItemRepository implementation.

use std::sync::Mutex;

use tracing::debug;

use super::{lock, next_id};
use crate::db::{
    DbError, DbResult, Id, ItemPatch, ItemRepository, NewItem, TodoItem, TodoList,
    normalize_description, same_text,
};

/// Mutex-guarded item store.
///
/// Holds the list table only to check parent existence. Lists are never
/// deleted, so the list lock is released before the item lock is taken.
pub struct MemoryItemRepository<'a> {
    pub(crate) lists: &'a Mutex<Vec<TodoList>>,
    pub(crate) items: &'a Mutex<Vec<TodoItem>>,
}

impl MemoryItemRepository<'_> {
    fn ensure_list(&self, list_id: Id) -> DbResult<()> {
        if lock(self.lists)?.iter().any(|l| l.id == list_id) {
            Ok(())
        } else {
            Err(DbError::list_not_found(list_id))
        }
    }
}

/// Position of the item matching both ids.
fn position(items: &[TodoItem], list_id: Id, item_id: Id) -> DbResult<usize> {
    items
        .iter()
        .position(|i| i.id == item_id && i.list_id == list_id)
        .ok_or_else(|| DbError::item_not_found(list_id, item_id))
}

/// Whether another item of the list already carries this description.
fn has_duplicate(items: &[TodoItem], list_id: Id, description: &str, except: Option<Id>) -> bool {
    items.iter().any(|i| {
        i.list_id == list_id && Some(i.id) != except && same_text(&i.description, description)
    })
}

impl ItemRepository for MemoryItemRepository<'_> {
    fn list_by_list(&self, list_id: Id) -> DbResult<Vec<TodoItem>> {
        self.ensure_list(list_id)?;

        let items = lock(self.items)?;
        Ok(items
            .iter()
            .filter(|i| i.list_id == list_id)
            .cloned()
            .collect())
    }

    fn create(&self, list_id: Id, item: &NewItem) -> DbResult<TodoItem> {
        self.ensure_list(list_id)?;
        let description = normalize_description(&item.description)?;

        let mut items = lock(self.items)?;
        if has_duplicate(&items, list_id, &description, None) {
            return Err(DbError::duplicate_description());
        }

        let created = TodoItem {
            id: next_id(items.as_slice(), |i: &TodoItem| i.id),
            list_id,
            description,
            completed: item.completed,
        };
        items.push(created.clone());
        debug!(list_id, item_id = created.id, "created item");

        Ok(created)
    }

    fn update(&self, list_id: Id, item_id: Id, patch: ItemPatch) -> DbResult<TodoItem> {
        self.ensure_list(list_id)?;

        let mut items = lock(self.items)?;
        let index = position(&items, list_id, item_id)?;
        if patch.is_empty() {
            return Err(DbError::EmptyUpdate);
        }

        let description = match patch.description {
            Some(ref description) => {
                let description = normalize_description(description)?;
                if has_duplicate(&items, list_id, &description, Some(item_id)) {
                    return Err(DbError::duplicate_description());
                }
                Some(description)
            }
            None => None,
        };

        let item = &mut items[index];
        item.apply(ItemPatch {
            description,
            completed: patch.completed,
        });
        debug!(list_id, item_id, "updated item");

        Ok(item.clone())
    }

    fn complete(&self, list_id: Id, item_id: Id) -> DbResult<TodoItem> {
        self.ensure_list(list_id)?;

        let mut items = lock(self.items)?;
        let index = position(&items, list_id, item_id)?;
        let item = &mut items[index];
        item.completed = true;

        Ok(item.clone())
    }

    fn delete(&self, list_id: Id, item_id: Id) -> DbResult<()> {
        self.ensure_list(list_id)?;

        let mut items = lock(self.items)?;
        let index = position(&items, list_id, item_id)?;
        items.remove(index);
        debug!(list_id, item_id, "deleted item");

        Ok(())
    }
}
