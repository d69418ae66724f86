//! Delete-todo use case.
//!
//! # Responsibility
//! - Parse the id, check deletability through the domain service and remove
//!   the todo from the store.

use crate::model::todo::TodoId;
use crate::repo::todo_repo::TodoRepository;
use crate::service::todo_service::DomainService;
use crate::usecase::{UseCaseError, UseCaseResult};
use log::{error, info};
use serde::Deserialize;

const OPERATION: &str = "delete todo";

/// Input for deleting a todo by id.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteTodoRequest {
    pub id: String,
}

/// Handles deletion of existing todos.
pub struct DeleteTodoUseCase<R: TodoRepository> {
    repo: R,
    service: DomainService<R>,
}

impl<R: TodoRepository> DeleteTodoUseCase<R> {
    pub fn new(repo: R, service: DomainService<R>) -> Self {
        Self { repo, service }
    }

    /// Deletes the todo with the requested id. No payload on success.
    ///
    /// # Errors
    /// - `UseCaseError::InvalidId` when the id string is malformed.
    /// - `UseCaseError::NotFound` when no todo with that id exists.
    /// - `UseCaseError::Persistence` on store failure, including a delete
    ///   that affected no rows.
    pub fn execute(&self, request: &DeleteTodoRequest) -> UseCaseResult<()> {
        match self.run(request) {
            Ok(()) => {
                info!(
                    "event=todo_delete module=usecase status=ok id={}",
                    request.id
                );
                Ok(())
            }
            Err(err) => {
                error!("event=todo_delete module=usecase status=error error={err}");
                Err(err)
            }
        }
    }

    fn run(&self, request: &DeleteTodoRequest) -> UseCaseResult<()> {
        let id = TodoId::parse(&request.id).map_err(|source| UseCaseError::InvalidId {
            operation: OPERATION,
            source,
        })?;

        self.service
            .can_delete(id)
            .map_err(|err| UseCaseError::from_repo(OPERATION, err))?;

        self.repo
            .delete(id)
            .map_err(|err| UseCaseError::from_repo(OPERATION, err))?;

        Ok(())
    }
}
