//! Domain model for the todolist backend.
//!
//! # Responsibility
//! - Define the Todo aggregate and its self-validating value objects.
//! - Own the canonical textual forms for ids and timestamps.
//!
//! # Invariants
//! - Every todo is identified by a stable `TodoId`.
//! - `Title` can only be obtained through its validating constructor.
//! - `updated_at >= created_at` holds for every todo at all times.

pub mod todo;
