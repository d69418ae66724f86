//! Todo domain service: field validation and completion statistics.
//!
//! # Responsibility
//! - Validate create/update input before any entity is touched.
//! - Gate deletion on existence.
//! - Aggregate completion statistics over a given set of todos.
//!
//! # Invariants
//! - Validation has no side effects and never touches the store.
//! - Partial-update validation only checks fields that are present.

use crate::model::todo::{Title, Todo, TodoId, ValidationError, MAX_DESCRIPTION_CHARS};
use crate::repo::todo_repo::{RepoError, RepoResult, TodoRepository};
use serde::Serialize;

/// Derived completion counters for a set of todos. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompletionStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// `completed / total`; defined as 0 when `total` is 0.
    #[serde(rename = "completion_ratio")]
    pub ratio: f64,
}

impl CompletionStats {
    /// All-zero stats, the result for an empty input set.
    pub fn zero() -> Self {
        Self {
            total: 0,
            completed: 0,
            pending: 0,
            ratio: 0.0,
        }
    }
}

/// Computes completion stats over the given todos.
///
/// Pure function; the caller decides which set to aggregate (filtered or
/// full).
pub fn completion_stats(todos: &[Todo]) -> CompletionStats {
    if todos.is_empty() {
        return CompletionStats::zero();
    }

    let total = todos.len();
    let completed = todos.iter().filter(|todo| todo.is_completed()).count();

    CompletionStats {
        total,
        completed,
        pending: total - completed,
        ratio: completed as f64 / total as f64,
    }
}

/// Stateless domain service for todo business rules.
pub struct DomainService<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> DomainService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates input for todo creation.
    ///
    /// # Errors
    /// - `ValidationError` when the title cannot be constructed or the
    ///   description exceeds `MAX_DESCRIPTION_CHARS`.
    pub fn validate_for_create(
        &self,
        title: &str,
        description: &str,
    ) -> Result<(), ValidationError> {
        Title::new(title)?;
        validate_description(description)
    }

    /// Validates the supplied fields of a partial update.
    ///
    /// Absent fields are not validated or touched. The existing entity and
    /// the completion flag carry no field-level rules; they are part of the
    /// contract for future business rules.
    pub fn validate_for_update(
        &self,
        _existing: &Todo,
        title: Option<&str>,
        description: Option<&str>,
        _completed: Option<bool>,
    ) -> Result<(), ValidationError> {
        if let Some(title) = title {
            Title::new(title)?;
        }
        if let Some(description) = description {
            validate_description(description)?;
        }
        Ok(())
    }

    /// Checks whether the todo with `id` may be deleted.
    ///
    /// Existence is the only precondition.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when no such todo exists.
    /// - Store errors from the existence check are passed through.
    pub fn can_delete(&self, id: TodoId) -> RepoResult<()> {
        if self.repo.exists(id)? {
            Ok(())
        } else {
            Err(RepoError::NotFound(id))
        }
    }
}

fn validate_description(description: &str) -> Result<(), ValidationError> {
    let chars = description.chars().count();
    if chars > MAX_DESCRIPTION_CHARS {
        return Err(ValidationError::DescriptionTooLong { chars });
    }
    Ok(())
}
