//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for data access,
//! allowing different storage backends to be swapped without changing
//! the HTTP layer.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (TodoList, TodoItem) and field normalization
//! - `repository`: Trait definitions for data access
//! - `memory`: In-memory implementation

mod error;
pub mod memory;
mod models;
mod repository;


pub use error::{DbError, DbResult};
pub use memory::MemoryDatabase;
pub use models::*;
pub use repository::*;
