//! Core domain and application logic for the todolist backend.
//! This crate is the single source of truth for business invariants; HTTP
//! routing and process startup live outside it.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod usecase;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{InvalidIdentifier, Title, Todo, TodoId, ValidationError};
pub use repo::todo_repo::{RepoError, RepoResult, SqliteTodoRepository, TodoRepository};
pub use service::todo_service::{completion_stats, CompletionStats, DomainService};
pub use usecase::create_todo::{CreateTodoRequest, CreateTodoUseCase};
pub use usecase::delete_todo::{DeleteTodoRequest, DeleteTodoUseCase};
pub use usecase::get_todos::{GetTodosRequest, GetTodosResponse, GetTodosUseCase};
pub use usecase::update_todo::{UpdateTodoRequest, UpdateTodoUseCase};
pub use usecase::{TodoDto, UseCaseError, UseCaseResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
