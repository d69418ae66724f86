//! Application use cases.
//!
//! # Responsibility
//! - Orchestrate validation, entity mutation and persistence, one use case
//!   per operation.
//! - Shape repository results into boundary DTOs.
//!
//! # Invariants
//! - Use cases hold no state beyond a repository handle and the domain
//!   service; every call is an independent, complete operation.
//! - Every failure is surfaced to the caller with an operation label; no
//!   error is retried or swallowed here.

use crate::model::todo::{format_timestamp, InvalidIdentifier, Todo, TodoId, ValidationError};
use crate::repo::todo_repo::RepoError;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod create_todo;
pub mod delete_todo;
pub mod get_todos;
pub mod update_todo;

pub type UseCaseResult<T> = Result<T, UseCaseError>;

/// Boundary representation of a todo.
///
/// Timestamps are canonical RFC 3339 strings; the id is its canonical
/// textual form. Empty descriptions are omitted from serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoDto {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Todo> for TodoDto {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id.to_string(),
            title: todo.title.as_str().to_string(),
            description: todo.description.clone(),
            completed: todo.completed,
            created_at: format_timestamp(todo.created_at),
            updated_at: format_timestamp(todo.updated_at),
        }
    }
}

/// Use-case failure: an operation label wrapping the underlying cause.
///
/// The external interface maps variants to its own status codes
/// (`NotFound` -> 404-equivalent, `Validation`/`InvalidId` -> 400,
/// `Persistence` -> 500); that mapping is not this layer's concern.
#[derive(Debug)]
pub enum UseCaseError {
    Validation {
        operation: &'static str,
        source: ValidationError,
    },
    InvalidId {
        operation: &'static str,
        source: InvalidIdentifier,
    },
    NotFound {
        operation: &'static str,
        id: TodoId,
    },
    Persistence {
        operation: &'static str,
        source: RepoError,
    },
}

impl UseCaseError {
    /// Returns the label of the operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Validation { operation, .. }
            | Self::InvalidId { operation, .. }
            | Self::NotFound { operation, .. }
            | Self::Persistence { operation, .. } => operation,
        }
    }

    // NotFound from the repository keeps its meaning; everything else is a
    // store failure.
    fn from_repo(operation: &'static str, err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => Self::NotFound { operation, id },
            other => Self::Persistence {
                operation,
                source: other,
            },
        }
    }
}

impl Display for UseCaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { operation, source } => write!(f, "{operation}: {source}"),
            Self::InvalidId { operation, source } => write!(f, "{operation}: {source}"),
            Self::NotFound { operation, id } => write!(f, "{operation}: todo not found: {id}"),
            Self::Persistence { operation, source } => write!(f, "{operation}: {source}"),
        }
    }
}

impl Error for UseCaseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation { source, .. } => Some(source),
            Self::InvalidId { source, .. } => Some(source),
            Self::NotFound { .. } => None,
            Self::Persistence { source, .. } => Some(source),
        }
    }
}
