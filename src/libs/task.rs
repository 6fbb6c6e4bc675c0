//! Core task types shared between the repository, commands, and export.
//!
//! `Task` is the full persisted record, `TaskSummary` the projection used by
//! the list view. The enums here describe the repository's operation surface:
//! priority filtering, single-field updates, exact-match search, and delete
//! scope.

use crate::libs::formatter::title_case;
use chrono::NaiveDate;
use thiserror::Error;

/// Statuses accepted by `Tasks::insert`. Updates are not checked against
/// this list; that asymmetry is part of the persisted contract.
pub const VALID_STATUSES: [&str; 3] = ["Pending", "In Progress", "Completed"];

/// Priorities offered by the interactive forms. Stored as plain text and
/// never enforced by the repository.
pub const PRIORITIES: [&str; 3] = ["High", "Medium", "Low"];

/// Errors produced by the task repository.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Insert rejected because the normalized status is outside the fixed
    /// set. No row is written.
    #[error("Status must be 'Completed', 'Pending', or 'In Progress' (got '{0}')")]
    InvalidStatus(String),
    #[error(transparent)]
    Storage(#[from] rusqlite::Error),
}

/// A full task record as persisted in the `tasks` table.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: Option<i32>,
    pub name: String,
    pub status: String,
    pub tags: String,
    pub priority: String,
    pub due_date: NaiveDate,
    pub created_date: NaiveDate,
    /// Day gap between the due date and "today" at the time of the last
    /// write. Stale by construction: it is never recomputed on read.
    pub pending_days: i64,
    pub information: String,
}

impl Task {
    /// Builds a task ready for insertion, applying title-case normalization
    /// to all free-text fields.
    pub fn new(
        name: &str,
        status: &str,
        tags: &str,
        priority: &str,
        due_date: NaiveDate,
        created_date: NaiveDate,
        pending_days: i64,
        information: &str,
    ) -> Self {
        Task {
            id: None,
            name: title_case(name),
            status: title_case(status),
            tags: title_case(tags),
            priority: title_case(priority),
            due_date,
            created_date,
            pending_days,
            information: title_case(information),
        }
    }
}

/// The list-view projection: dates and notes are excluded.
#[derive(Debug, Clone)]
pub struct TaskSummary {
    pub id: i32,
    pub name: String,
    pub status: String,
    pub tags: String,
    pub priority: String,
    pub pending_days: i64,
}

/// Filter applied by `Tasks::fetch`. Anything other than `All` matches the
/// stored priority exactly (case-sensitive, post-normalization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PriorityFilter {
    All,
    High,
    Medium,
    Low,
}

impl PriorityFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityFilter::All => "All",
            PriorityFilter::High => "High",
            PriorityFilter::Medium => "Medium",
            PriorityFilter::Low => "Low",
        }
    }
}

/// A single-field overwrite. `DueDate` is the only variant with a side
/// effect: it also recomputes `pending_days` against today.
#[derive(Debug, Clone)]
pub enum FieldUpdate {
    Status(String),
    Priority(String),
    Tags(String),
    DueDate(NaiveDate),
    Information(String),
}

/// Exact-match search key. The value is compared against the stored column
/// as-is; callers must match stored casing.
#[derive(Debug, Clone)]
pub enum SearchQuery {
    Status(String),
    Tags(String),
    Id(i32),
}

/// Scope of a delete. `ById(None)` and a zero id delete nothing while still
/// reporting success; callers relying on that contract are pinned by tests.
#[derive(Debug, Clone, Copy)]
pub enum DeleteScope {
    All,
    ById(Option<i32>),
}
