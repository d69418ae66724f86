//! Domain services.
//!
//! # Responsibility
//! - Host cross-cutting validation and read-side aggregation that no single
//!   entity instance can own.
//!
//! # Invariants
//! - Services stay stateless; the repository is their only collaborator.

pub mod todo_service;
