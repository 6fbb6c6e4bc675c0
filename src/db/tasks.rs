//! The task repository: every statement issued against the `tasks` table.
//!
//! The schema is created idempotently by the constructor; there is no
//! migration path. All operations are single-statement, immediately
//! committed, with one documented exception: a due-date update issues two
//! statements (the date overwrite and the `pending_days` recompute) without
//! a wrapping transaction, so a crash between them leaves the counter stale
//! until the next due-date write.

use super::db::Db;
use crate::libs::deadline::pending_days;
use crate::libs::task::{DeleteScope, FieldUpdate, PriorityFilter, SearchQuery, Task, TaskError, TaskSummary, VALID_STATUSES};
use anyhow::Result;
use chrono::Local;
use rusqlite::{params, types::ToSql, Connection, OptionalExtension, Row};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    taskname TEXT,
    status TEXT,
    tags TEXT,
    priority TEXT,
    selected_date DATE,
    created_date DATE,
    pending_days INTEGER,
    information TEXT
)";
const INSERT_TASK: &str = "INSERT INTO tasks (taskname, status, tags, priority, selected_date, created_date, pending_days, information)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_SUMMARIES: &str = "SELECT id, taskname, status, tags, priority, pending_days FROM tasks";
const SELECT_SUMMARIES_BY_PRIORITY: &str = "SELECT id, taskname, status, tags, priority, pending_days FROM tasks WHERE priority = ?";
const SELECT_TASKS: &str = "SELECT * FROM tasks";
const SELECT_TASKS_BY_STATUS: &str = "SELECT * FROM tasks WHERE status = ?";
const SELECT_TASKS_BY_TAGS: &str = "SELECT * FROM tasks WHERE tags = ?";
const SELECT_TASK_BY_ID: &str = "SELECT * FROM tasks WHERE id = ?";
const UPDATE_STATUS: &str = "UPDATE tasks SET status = ? WHERE id = ?";
const UPDATE_PRIORITY: &str = "UPDATE tasks SET priority = ? WHERE id = ?";
const UPDATE_TAGS: &str = "UPDATE tasks SET tags = ? WHERE id = ?";
const UPDATE_DUE_DATE: &str = "UPDATE tasks SET selected_date = ? WHERE id = ?";
const UPDATE_PENDING_DAYS: &str = "UPDATE tasks SET pending_days = ? WHERE id = ?";
const UPDATE_INFORMATION: &str = "UPDATE tasks SET information = ? WHERE id = ?";
const DELETE_ALL_TASKS: &str = "DELETE FROM tasks";
const DELETE_TASK_BY_ID: &str = "DELETE FROM tasks WHERE id = ?";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_TASKS, [])?;

        Ok(Tasks { conn: db.conn })
    }

    /// Persists a new task and returns its assigned id.
    ///
    /// The task is expected to arrive normalized (`Task::new`); the status
    /// is re-checked against the fixed set here so that no row is written
    /// for an unknown status. This is the only validated write path: the
    /// update path below deliberately skips it.
    pub fn insert(&mut self, task: &Task) -> Result<i32, TaskError> {
        if !VALID_STATUSES.contains(&task.status.as_str()) {
            return Err(TaskError::InvalidStatus(task.status.clone()));
        }

        self.conn.execute(
            INSERT_TASK,
            params![
                task.name,
                task.status,
                task.tags,
                task.priority,
                task.due_date,
                task.created_date,
                task.pending_days,
                task.information
            ],
        )?;

        Ok(self.conn.last_insert_rowid() as i32)
    }

    /// Returns list-view summaries, optionally restricted to one priority.
    ///
    /// The filter matches the stored column exactly; normalized storage
    /// makes "High"/"Medium"/"Low" the only values that ever match.
    pub fn fetch(&mut self, filter: PriorityFilter) -> Result<Vec<TaskSummary>, TaskError> {
        let mut summaries = Vec::new();

        match filter {
            PriorityFilter::All => {
                let mut stmt = self.conn.prepare(SELECT_SUMMARIES)?;
                let rows = stmt.query_map([], Self::map_summary)?;
                for summary in rows {
                    summaries.push(summary?);
                }
            }
            _ => {
                let mut stmt = self.conn.prepare(SELECT_SUMMARIES_BY_PRIORITY)?;
                let rows = stmt.query_map(params![filter.as_str()], Self::map_summary)?;
                for summary in rows {
                    summaries.push(summary?);
                }
            }
        }

        Ok(summaries)
    }

    /// Overwrites a single field of the task with `task_id`.
    ///
    /// No value is validated against any domain here, status included.
    /// A due-date update recomputes `pending_days` against today and writes
    /// it as a second statement. Returns the affected row count; an unknown
    /// id affects zero rows and is not an error.
    pub fn update_field(&mut self, task_id: i32, update: FieldUpdate) -> Result<usize, TaskError> {
        let affected = match update {
            FieldUpdate::Status(value) => self.conn.execute(UPDATE_STATUS, params![value, task_id])?,
            FieldUpdate::Priority(value) => self.conn.execute(UPDATE_PRIORITY, params![value, task_id])?,
            FieldUpdate::Tags(value) => self.conn.execute(UPDATE_TAGS, params![value, task_id])?,
            FieldUpdate::Information(value) => self.conn.execute(UPDATE_INFORMATION, params![value, task_id])?,
            FieldUpdate::DueDate(due) => {
                let affected = self.conn.execute(UPDATE_DUE_DATE, params![due, task_id])?;
                let pending = pending_days(due, Local::now().date_naive());
                self.conn.execute(UPDATE_PENDING_DAYS, params![pending, task_id])?;
                affected
            }
        };

        Ok(affected)
    }

    /// Exact-match lookup returning full records. The search value is bound
    /// as given; no normalization is applied to it.
    pub fn search(&mut self, query: &SearchQuery) -> Result<Vec<Task>, TaskError> {
        let (sql, value): (&str, &dyn ToSql) = match query {
            SearchQuery::Status(value) => (SELECT_TASKS_BY_STATUS, value),
            SearchQuery::Tags(value) => (SELECT_TASKS_BY_TAGS, value),
            SearchQuery::Id(id) => (SELECT_TASK_BY_ID, id),
        };

        let mut stmt = self.conn.prepare(sql)?;
        let bound: &[&dyn ToSql] = &[value];
        let rows = stmt.query_map(bound, Self::map_task)?;
        let mut tasks = Vec::new();
        for task in rows {
            tasks.push(task?);
        }

        Ok(tasks)
    }

    /// Deletes per the given scope and returns the number of rows removed.
    ///
    /// `ById(None)` and an id of 0 remove nothing; both still count as a
    /// successful delete at the command layer.
    pub fn delete(&mut self, scope: DeleteScope) -> Result<usize, TaskError> {
        let deleted = match scope {
            DeleteScope::All => self.conn.execute(DELETE_ALL_TASKS, [])?,
            DeleteScope::ById(Some(id)) if id != 0 => self.conn.execute(DELETE_TASK_BY_ID, params![id])?,
            DeleteScope::ById(_) => 0,
        };

        Ok(deleted)
    }

    /// Fetches the full record for `task_id`, or `None` when absent.
    pub fn get_by_id(&mut self, task_id: i32) -> Result<Option<Task>, TaskError> {
        self.conn
            .query_row(SELECT_TASK_BY_ID, params![task_id], Self::map_task)
            .optional()
            .map_err(Into::into)
    }

    /// Every full record, in insertion order. Backs the exporter.
    pub fn all(&mut self) -> Result<Vec<Task>, TaskError> {
        let mut stmt = self.conn.prepare(SELECT_TASKS)?;
        let rows = stmt.query_map([], Self::map_task)?;
        let mut tasks = Vec::new();
        for task in rows {
            tasks.push(task?);
        }

        Ok(tasks)
    }

    fn map_summary(row: &Row) -> rusqlite::Result<TaskSummary> {
        Ok(TaskSummary {
            id: row.get(0)?,
            name: row.get(1)?,
            status: row.get(2)?,
            tags: row.get(3)?,
            priority: row.get(4)?,
            pending_days: row.get(5)?,
        })
    }

    fn map_task(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            name: row.get(1)?,
            status: row.get(2)?,
            tags: row.get(3)?,
            priority: row.get(4)?,
            due_date: row.get(5)?,
            created_date: row.get(6)?,
            pending_days: row.get(7)?,
            information: row.get(8)?,
        })
    }
}
