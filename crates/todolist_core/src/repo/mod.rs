//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the persistence contract consumed by the domain and use cases.
//! - Isolate SQLite query details from use-case orchestration.
//!
//! # Invariants
//! - Zero-rows-affected on update/delete is reported as an explicit error.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod todo_repo;
