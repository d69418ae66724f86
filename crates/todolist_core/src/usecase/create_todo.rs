//! Create-todo use case.
//!
//! # Responsibility
//! - Validate input, construct the entity, persist it and shape the
//!   response.

use crate::model::todo::{Title, Todo};
use crate::repo::todo_repo::TodoRepository;
use crate::service::todo_service::DomainService;
use crate::usecase::{TodoDto, UseCaseError, UseCaseResult};
use log::{error, info};
use serde::Deserialize;

const OPERATION: &str = "create todo";

/// Input for creating a todo.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Handles creation of new todos.
pub struct CreateTodoUseCase<R: TodoRepository> {
    repo: R,
    service: DomainService<R>,
}

impl<R: TodoRepository> CreateTodoUseCase<R> {
    pub fn new(repo: R, service: DomainService<R>) -> Self {
        Self { repo, service }
    }

    /// Creates a new todo and returns its boundary representation.
    ///
    /// # Errors
    /// - `UseCaseError::Validation` on bad title/description input.
    /// - `UseCaseError::Persistence` when the store rejects the insert.
    pub fn execute(&self, request: &CreateTodoRequest) -> UseCaseResult<TodoDto> {
        match self.run(request) {
            Ok(dto) => {
                info!("event=todo_create module=usecase status=ok id={}", dto.id);
                Ok(dto)
            }
            Err(err) => {
                error!("event=todo_create module=usecase status=error error={err}");
                Err(err)
            }
        }
    }

    fn run(&self, request: &CreateTodoRequest) -> UseCaseResult<TodoDto> {
        self.service
            .validate_for_create(&request.title, &request.description)
            .map_err(|source| UseCaseError::Validation {
                operation: OPERATION,
                source,
            })?;

        let title = Title::new(&request.title).map_err(|source| UseCaseError::Validation {
            operation: OPERATION,
            source,
        })?;

        let todo = Todo::new(title, request.description.clone());

        self.repo
            .create(&todo)
            .map_err(|err| UseCaseError::from_repo(OPERATION, err))?;

        Ok(TodoDto::from(&todo))
    }
}
