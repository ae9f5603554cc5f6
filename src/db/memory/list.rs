//! In-memory ListRepository implementation.

use std::sync::Mutex;

use tracing::debug;

use super::{lock, next_id};
use crate::db::{DbError, DbResult, ListRepository, TodoList, normalize_list_name, same_text};

/// Mutex-guarded list store.
pub struct MemoryListRepository<'a> {
    pub(crate) lists: &'a Mutex<Vec<TodoList>>,
}

impl ListRepository for MemoryListRepository<'_> {
    fn list(&self) -> DbResult<Vec<TodoList>> {
        Ok(lock(self.lists)?.clone())
    }

    fn create(&self, name: &str) -> DbResult<TodoList> {
        let name = normalize_list_name(name)?;

        let mut lists = lock(self.lists)?;
        if lists.iter().any(|l| same_text(&l.name, &name)) {
            return Err(DbError::duplicate_list_name());
        }

        let list = TodoList {
            id: next_id(lists.as_slice(), |l: &TodoList| l.id),
            name,
        };
        lists.push(list.clone());
        debug!(list_id = list.id, "created list");

        Ok(list)
    }
}
