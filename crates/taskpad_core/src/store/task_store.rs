//! Task store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the durable CRUD surface backing the task list.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths validate the task name before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - `get_all` ordering is stable within one snapshot read
//!   (creation time ascending, id as tiebreak).
//! - Delete is a hard delete; a deleted id never reappears.

use crate::db::DbError;
use crate::model::task::{validate_task_name, Task, TaskId, TaskValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for task persistence and query operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(TaskValidationError),
    Db(DbError),
    NotFound(TaskId),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable `id -> Task` mapping.
///
/// Duplicate task names are permitted; only identity is unique.
pub trait TaskStore {
    /// Persists a new task and returns it with its freshly assigned id.
    fn insert(&self, task_name: &str, is_done: bool) -> StoreResult<Task>;
    /// Returns the full collection in stable snapshot order.
    fn get_all(&self) -> StoreResult<Vec<Task>>;
    /// Replaces name and done flag on the record with the given id.
    fn update_by_id(&self, id: TaskId, task_name: &str, is_done: bool) -> StoreResult<()>;
    /// Removes the record with the given id.
    fn delete_by_id(&self, id: TaskId) -> StoreResult<()>;
}

/// SQLite-backed task store.
pub struct SqliteTaskStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskStore<'conn> {
    /// Constructs a store from a migrated/ready connection.
    ///
    /// Rejects connections whose schema does not match this binary's
    /// migration level instead of failing later mid-operation.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl TaskStore for SqliteTaskStore<'_> {
    fn insert(&self, task_name: &str, is_done: bool) -> StoreResult<Task> {
        validate_task_name(task_name)?;

        let task = Task::with_id(Uuid::new_v4(), task_name, is_done);
        self.conn.execute(
            "INSERT INTO tasks (uuid, task_name, is_done)
             VALUES (?1, ?2, ?3);",
            params![
                task.id.to_string(),
                task.task_name.as_str(),
                bool_to_int(task.is_done),
            ],
        )?;

        Ok(task)
    }

    fn get_all(&self) -> StoreResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(
            "SELECT uuid, task_name, is_done
             FROM tasks
             ORDER BY created_at ASC, uuid ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn update_by_id(&self, id: TaskId, task_name: &str, is_done: bool) -> StoreResult<()> {
        validate_task_name(task_name)?;

        let changed = self.conn.execute(
            "UPDATE tasks
             SET
                task_name = ?2,
                is_done = ?3,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?1;",
            params![id.to_string(), task_name, bool_to_int(is_done)],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    fn delete_by_id(&self, id: TaskId) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE uuid = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_task_row(row: &Row<'_>) -> StoreResult<Task> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        StoreError::InvalidData(format!("invalid uuid value `{uuid_text}` in tasks.uuid"))
    })?;

    let is_done = match row.get::<_, i64>("is_done")? {
        0 => false,
        1 => true,
        other => {
            return Err(StoreError::InvalidData(format!(
                "invalid is_done value `{other}` in tasks.is_done"
            )));
        }
    };

    let task = Task::with_id(id, row.get::<_, String>("task_name")?, is_done);
    task.validate()?;
    Ok(task)
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

fn ensure_connection_ready(conn: &Connection) -> StoreResult<()> {
    let expected_version = crate::db::migrations::latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "tasks")? {
        return Err(StoreError::MissingRequiredTable("tasks"));
    }

    for column in ["uuid", "task_name", "is_done", "created_at", "updated_at"] {
        if !table_has_column(conn, "tasks", column)? {
            return Err(StoreError::MissingRequiredColumn {
                table: "tasks",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> StoreResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> StoreResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
