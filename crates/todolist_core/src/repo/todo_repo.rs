//! Todo repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the capability interface any storage backend must implement.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `get_by_id` reports an absent row as `Ok(None)`, never as an error.
//! - `update`/`delete` check affected-row counts explicitly; zero rows is
//!   `RepoError::NoRowsAffected`, not a silent success.

use crate::db::DbError;
use crate::model::todo::{format_timestamp, parse_timestamp, Title, Todo, TodoId};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TODO_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    completed,
    created_at,
    updated_at
FROM todos";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence and query error for todo storage.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(TodoId),
    NoRowsAffected {
        operation: &'static str,
        id: TodoId,
    },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
            Self::NoRowsAffected { operation, id } => {
                write!(f, "{operation} affected no rows for todo {id}")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted todo data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::NoRowsAffected { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Capability interface for todo persistence.
///
/// Any backend implementing this trait is substitutable under the domain
/// service and use cases.
pub trait TodoRepository {
    /// Persists a new todo.
    fn create(&self, todo: &Todo) -> RepoResult<()>;
    /// Fetches one todo by id; absent rows yield `Ok(None)`.
    fn get_by_id(&self, id: TodoId) -> RepoResult<Option<Todo>>;
    /// Fetches all todos in creation order.
    fn get_all(&self) -> RepoResult<Vec<Todo>>;
    /// Persists the current state of an existing todo.
    fn update(&self, todo: &Todo) -> RepoResult<()>;
    /// Removes a todo by id.
    fn delete(&self, id: TodoId) -> RepoResult<()>;
    /// Fetches todos filtered by completion flag, in creation order.
    fn find_by_completed(&self, completed: bool) -> RepoResult<Vec<Todo>>;
    /// Checks existence without materializing the row.
    fn exists(&self, id: TodoId) -> RepoResult<bool>;
}

// Lets a single repository handle be shared by a use case and the domain
// service without cloning the backend.
impl<T: TodoRepository + ?Sized> TodoRepository for &T {
    fn create(&self, todo: &Todo) -> RepoResult<()> {
        (**self).create(todo)
    }

    fn get_by_id(&self, id: TodoId) -> RepoResult<Option<Todo>> {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> RepoResult<Vec<Todo>> {
        (**self).get_all()
    }

    fn update(&self, todo: &Todo) -> RepoResult<()> {
        (**self).update(todo)
    }

    fn delete(&self, id: TodoId) -> RepoResult<()> {
        (**self).delete(id)
    }

    fn find_by_completed(&self, completed: bool) -> RepoResult<Vec<Todo>> {
        (**self).find_by_completed(completed)
    }

    fn exists(&self, id: TodoId) -> RepoResult<bool> {
        (**self).exists(id)
    }
}

/// SQLite-backed todo repository.
#[derive(Clone, Copy)]
pub struct SqliteTodoRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTodoRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TodoRepository for SqliteTodoRepository<'_> {
    fn create(&self, todo: &Todo) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO todos (
                id,
                title,
                description,
                completed,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                todo.id.to_string(),
                todo.title.as_str(),
                todo.description.as_str(),
                bool_to_int(todo.completed),
                format_timestamp(todo.created_at),
                format_timestamp(todo.updated_at),
            ],
        )?;

        Ok(())
    }

    fn get_by_id(&self, id: TodoId) -> RepoResult<Option<Todo>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TODO_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_todo_row(row)?));
        }

        Ok(None)
    }

    fn get_all(&self) -> RepoResult<Vec<Todo>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TODO_SELECT_SQL} ORDER BY created_at ASC, id ASC;"))?;

        let mut rows = stmt.query([])?;
        collect_todos(&mut rows)
    }

    fn update(&self, todo: &Todo) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE todos
             SET
                title = ?1,
                description = ?2,
                completed = ?3,
                updated_at = ?4
             WHERE id = ?5;",
            params![
                todo.title.as_str(),
                todo.description.as_str(),
                bool_to_int(todo.completed),
                format_timestamp(todo.updated_at),
                todo.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NoRowsAffected {
                operation: "update",
                id: todo.id,
            });
        }

        Ok(())
    }

    fn delete(&self, id: TodoId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NoRowsAffected {
                operation: "delete",
                id,
            });
        }

        Ok(())
    }

    fn find_by_completed(&self, completed: bool) -> RepoResult<Vec<Todo>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TODO_SELECT_SQL} WHERE completed = ?1 ORDER BY created_at ASC, id ASC;"
        ))?;

        let mut rows = stmt.query(params![bool_to_int(completed)])?;
        collect_todos(&mut rows)
    }

    fn exists(&self, id: TodoId) -> RepoResult<bool> {
        let found: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM todos WHERE id = ?1);",
            [id.to_string()],
            |row| row.get(0),
        )?;
        Ok(found > 0)
    }
}

fn collect_todos(rows: &mut rusqlite::Rows<'_>) -> RepoResult<Vec<Todo>> {
    let mut todos = Vec::new();
    while let Some(row) = rows.next()? {
        todos.push(parse_todo_row(row)?);
    }
    Ok(todos)
}

fn parse_todo_row(row: &Row<'_>) -> RepoResult<Todo> {
    let id_text: String = row.get("id")?;
    let id = TodoId::parse(&id_text)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid `{id_text}` in todos.id")))?;

    let title_text: String = row.get("title")?;
    let title = Title::new(&title_text)
        .map_err(|err| RepoError::InvalidData(format!("bad title in todos.title: {err}")))?;

    let completed = match row.get::<_, i64>("completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid completed value `{other}` in todos.completed"
            )));
        }
    };

    let created_at = parse_timestamp_column(row, "created_at")?;
    let updated_at = parse_timestamp_column(row, "updated_at")?;

    Ok(Todo {
        id,
        title,
        description: row.get("description")?,
        completed,
        created_at,
        updated_at,
    })
}

fn parse_timestamp_column(row: &Row<'_>, column: &str) -> RepoResult<DateTime<Utc>> {
    let text: String = row.get(column)?;
    parse_timestamp(&text).map_err(|err| {
        RepoError::InvalidData(format!("invalid timestamp `{text}` in todos.{column}: {err}"))
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
