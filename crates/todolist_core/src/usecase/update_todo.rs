//! Update-todo use case (partial update).
//!
//! # Responsibility
//! - Parse the id, fetch the entity, validate only the supplied fields and
//!   apply each through its entity mutation.
//!
//! # Invariants
//! - Absence of the entity is reported before any field validation.
//! - Omitted fields are untouched, never reset; supplying no fields is a
//!   successful identity round-trip.

use crate::model::todo::{Title, TodoId};
use crate::repo::todo_repo::TodoRepository;
use crate::service::todo_service::DomainService;
use crate::usecase::{TodoDto, UseCaseError, UseCaseResult};
use log::{error, info};
use serde::Deserialize;

const OPERATION: &str = "update todo";

/// Input for a partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTodoRequest {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Handles partial updates of existing todos.
pub struct UpdateTodoUseCase<R: TodoRepository> {
    repo: R,
    service: DomainService<R>,
}

impl<R: TodoRepository> UpdateTodoUseCase<R> {
    pub fn new(repo: R, service: DomainService<R>) -> Self {
        Self { repo, service }
    }

    /// Applies the supplied fields to an existing todo and persists it.
    ///
    /// # Errors
    /// - `UseCaseError::InvalidId` when the id string is malformed.
    /// - `UseCaseError::NotFound` when no todo with that id exists.
    /// - `UseCaseError::Validation` on bad supplied fields.
    /// - `UseCaseError::Persistence` on store failure, including an update
    ///   that affected no rows.
    pub fn execute(&self, request: &UpdateTodoRequest) -> UseCaseResult<TodoDto> {
        match self.run(request) {
            Ok(dto) => {
                info!("event=todo_update module=usecase status=ok id={}", dto.id);
                Ok(dto)
            }
            Err(err) => {
                error!("event=todo_update module=usecase status=error error={err}");
                Err(err)
            }
        }
    }

    fn run(&self, request: &UpdateTodoRequest) -> UseCaseResult<TodoDto> {
        let id = TodoId::parse(&request.id).map_err(|source| UseCaseError::InvalidId {
            operation: OPERATION,
            source,
        })?;

        let mut todo = self
            .repo
            .get_by_id(id)
            .map_err(|err| UseCaseError::from_repo(OPERATION, err))?
            .ok_or(UseCaseError::NotFound {
                operation: OPERATION,
                id,
            })?;

        self.service
            .validate_for_update(
                &todo,
                request.title.as_deref(),
                request.description.as_deref(),
                request.completed,
            )
            .map_err(|source| UseCaseError::Validation {
                operation: OPERATION,
                source,
            })?;

        // Each applied field goes through its own mutation, so `updated_at`
        // is bumped once per field, matching entity semantics.
        if let Some(title_text) = request.title.as_deref() {
            let title = Title::new(title_text).map_err(|source| UseCaseError::Validation {
                operation: OPERATION,
                source,
            })?;
            todo.rename(title);
        }

        if let Some(description) = request.description.as_deref() {
            todo.set_description(description);
        }

        if let Some(completed) = request.completed {
            if completed {
                todo.mark_completed();
            } else {
                todo.mark_incomplete();
            }
        }

        self.repo
            .update(&todo)
            .map_err(|err| UseCaseError::from_repo(OPERATION, err))?;

        Ok(TodoDto::from(&todo))
    }
}
