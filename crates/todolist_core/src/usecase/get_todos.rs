//! Get-todos use case.
//!
//! # Responsibility
//! - Fetch todos, optionally filtered by completion, and aggregate
//!   completion stats over the returned set.

use crate::repo::todo_repo::TodoRepository;
use crate::service::todo_service::{completion_stats, CompletionStats, DomainService};
use crate::usecase::{TodoDto, UseCaseError, UseCaseResult};
use log::{error, info};
use serde::{Deserialize, Serialize};

const OPERATION: &str = "get todos";

/// Input for listing todos. `completed = None` lists everything.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct GetTodosRequest {
    pub completed: Option<bool>,
}

/// Listing result: the todos plus stats computed over that same set.
#[derive(Debug, Clone, Serialize)]
pub struct GetTodosResponse {
    pub data: Vec<TodoDto>,
    pub stats: CompletionStats,
}

/// Handles retrieval of todos.
pub struct GetTodosUseCase<R: TodoRepository> {
    repo: R,
    // Held for symmetry with the other use cases; listing needs no
    // repository-backed rules today.
    _service: DomainService<R>,
}

impl<R: TodoRepository> GetTodosUseCase<R> {
    pub fn new(repo: R, service: DomainService<R>) -> Self {
        Self {
            repo,
            _service: service,
        }
    }

    /// Lists todos and their completion stats.
    ///
    /// An empty result is a success: empty list plus all-zero stats.
    ///
    /// # Errors
    /// - `UseCaseError::Persistence` on store failure.
    pub fn execute(&self, request: &GetTodosRequest) -> UseCaseResult<GetTodosResponse> {
        match self.run(request) {
            Ok(response) => {
                info!(
                    "event=todo_list module=usecase status=ok count={} filter={}",
                    response.data.len(),
                    request
                        .completed
                        .map_or("none".to_string(), |flag| flag.to_string())
                );
                Ok(response)
            }
            Err(err) => {
                error!("event=todo_list module=usecase status=error error={err}");
                Err(err)
            }
        }
    }

    fn run(&self, request: &GetTodosRequest) -> UseCaseResult<GetTodosResponse> {
        let todos = match request.completed {
            Some(flag) => self.repo.find_by_completed(flag),
            None => self.repo.get_all(),
        }
        .map_err(|err| UseCaseError::from_repo(OPERATION, err))?;

        // Stats describe the returned set, not the full unfiltered store.
        let stats = completion_stats(&todos);
        let data = todos.iter().map(TodoDto::from).collect();

        Ok(GetTodosResponse { data, stats })
    }
}
