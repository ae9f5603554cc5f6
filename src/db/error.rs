//! Database error types.
//!
//! This module provides abstracted error types for store operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Store operation errors.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum DbError {
    #[error("{message}")]
    #[diagnostic(code(todolist::db::not_found))]
    NotFound { message: String },

    #[error("{message}")]
    #[diagnostic(code(todolist::db::conflict))]
    Conflict { message: String },

    #[error("Invalid {field}: {message}")]
    #[diagnostic(code(todolist::db::validation_error))]
    Validation { field: String, message: String },

    #[error("At least one field must be provided for update")]
    #[diagnostic(
        code(todolist::db::empty_update),
        help("Supply `description`, `completed`, or both")
    )]
    EmptyUpdate,

    #[error("Database error: {message}")]
    #[diagnostic(code(todolist::db::database_error))]
    Database { message: String },
}

impl DbError {
    pub fn list_not_found(list_id: u64) -> Self {
        Self::NotFound {
            message: format!("List with ID {} not found", list_id),
        }
    }

    pub fn item_not_found(list_id: u64, item_id: u64) -> Self {
        Self::NotFound {
            message: format!("Item with ID {} not found in list {}", item_id, list_id),
        }
    }

    pub fn duplicate_list_name() -> Self {
        Self::Conflict {
            message: "A list with this name already exists".to_string(),
        }
    }

    pub fn duplicate_description() -> Self {
        Self::Conflict {
            message: "An item with this description already exists in the list".to_string(),
        }
    }
}

/// Result type for store operations.
pub type DbResult<T> = Result<T, DbError>;
