//! In-memory implementation of the database traits.
//!
//! Each store keeps its rows in a `Vec` behind its own mutex, so id
//! assignment, uniqueness checks and mutation happen under one lock.

mod connection;
mod item;
mod list;


pub use connection::MemoryDatabase;
pub use item::MemoryItemRepository;
pub use list::MemoryListRepository;

use std::sync::{Mutex, MutexGuard};

use crate::db::{DbError, DbResult};

/// Helper to acquire a table lock.
fn lock<T>(table: &Mutex<T>) -> DbResult<MutexGuard<'_, T>> {
    table.lock().map_err(|e| DbError::Database {
        message: format!("Failed to acquire store lock: {}", e),
    })
}

/// Next id under scan-max semantics: one past the largest id, or 1 if empty.
fn next_id<T>(rows: &[T], id: impl Fn(&T) -> u64) -> u64 {
    rows.iter().map(id).max().map_or(1, |max| max + 1)
}
