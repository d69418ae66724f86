//! Todo aggregate and value objects.
//!
//! # Responsibility
//! - Define `TodoId` and `Title` as immutable, self-validating wrappers.
//! - Define the `Todo` entity and its state-mutation operations.
//!
//! # Invariants
//! - `id` is assigned at creation and never changes.
//! - Every mutation re-stamps `updated_at`, strictly advancing it.
//! - `created_at` is set once and never moves.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Maximum title length in characters, counted after trimming.
pub const MAX_TITLE_CHARS: usize = 255;

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

/// Stable identifier for a todo.
///
/// Wraps a UUID so signatures state intent and raw strings cannot leak in
/// without passing through `parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Produces a fresh, globally-unique identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses the canonical textual form of an identifier.
    ///
    /// # Errors
    /// - Returns `InvalidIdentifier` when `text` is not a well-formed UUID.
    pub fn parse(text: &str) -> Result<Self, InvalidIdentifier> {
        Uuid::parse_str(text.trim())
            .map(Self)
            .map_err(|source| InvalidIdentifier {
                text: text.to_string(),
                source,
            })
    }

    /// Returns the underlying UUID value.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for TodoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error for malformed identifier strings.
///
/// Keeps the offending input for diagnostics; callers map this to their own
/// bad-request handling.
#[derive(Debug)]
pub struct InvalidIdentifier {
    text: String,
    source: uuid::Error,
}

impl InvalidIdentifier {
    /// Returns the input that failed to parse.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Display for InvalidIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid todo id `{}`", self.text)
    }
}

impl Error for InvalidIdentifier {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Field-level validation error for todo input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTitle,
    TitleTooLong { chars: usize },
    DescriptionTooLong { chars: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title cannot be empty"),
            Self::TitleTooLong { chars } => write!(
                f,
                "title cannot exceed {MAX_TITLE_CHARS} characters, got {chars}"
            ),
            Self::DescriptionTooLong { chars } => write!(
                f,
                "description cannot exceed {MAX_DESCRIPTION_CHARS} characters, got {chars}"
            ),
        }
    }
}

impl Error for ValidationError {}

/// Validated todo title.
///
/// Immutable; the inner string is always trimmed, non-empty and at most
/// `MAX_TITLE_CHARS` characters. There is no constructor path that bypasses
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    /// Trims surrounding whitespace and validates the result.
    ///
    /// # Errors
    /// - `ValidationError::EmptyTitle` when nothing remains after trimming.
    /// - `ValidationError::TitleTooLong` when over `MAX_TITLE_CHARS`.
    pub fn new(text: &str) -> Result<Self, ValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let chars = trimmed.chars().count();
        if chars > MAX_TITLE_CHARS {
            return Err(ValidationError::TitleTooLong { chars });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the validated title text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the title, yielding the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Title {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical domain record for a todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    /// Stable global ID, assigned at creation.
    pub id: TodoId,
    /// Validated title.
    pub title: Title,
    /// Free-form description; length is enforced by the domain service.
    pub description: String,
    /// Completion flag; `false` on creation.
    pub completed: bool,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
    /// Re-stamped by every mutation operation.
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Constructs a new todo with a fresh identifier.
    ///
    /// # Invariants
    /// - `completed` starts as `false`.
    /// - `created_at == updated_at` at the instant of creation.
    ///
    /// The caller must supply an already-validated `Title`; the description
    /// is accepted verbatim.
    pub fn new(title: Title, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: TodoId::new(),
            title,
            description: description.into(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets `completed = true` and re-stamps `updated_at`.
    ///
    /// Idempotent in effect, but still bumps the timestamp when already
    /// completed (always-bump-on-write semantics).
    pub fn mark_completed(&mut self) {
        self.completed = true;
        self.touch();
    }

    /// Sets `completed = false` and re-stamps `updated_at`.
    pub fn mark_incomplete(&mut self) {
        self.completed = false;
        self.touch();
    }

    /// Replaces the title and re-stamps `updated_at`.
    ///
    /// Validation already happened when `title` was constructed.
    pub fn rename(&mut self, title: Title) {
        self.title = title;
        self.touch();
    }

    /// Replaces the description and re-stamps `updated_at`.
    ///
    /// Length is checked by the domain service, not here.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.touch();
    }

    /// Returns whether the todo is completed.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    // Strictly advances `updated_at`, even when the clock has not moved
    // between two mutations.
    fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::nanoseconds(1)
        };
    }
}

/// Renders a timestamp in the canonical textual form (UTC RFC 3339 with
/// microsecond precision). Used for both storage and boundary responses.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parses the canonical textual timestamp form.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(text).map(|ts| ts.with_timezone(&Utc))
}
