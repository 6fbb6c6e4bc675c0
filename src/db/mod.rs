//! Database layer for the tudu application.
//!
//! A thin persistence layer over a single SQLite file: connection
//! bootstrap plus the task repository. The `tasks` table is created
//! idempotently at startup; there is no migration system.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudu::db::tasks::Tasks;
//! use tudu::libs::task::{PriorityFilter, Task};
//! use chrono::Local;
//!
//! # fn main() -> anyhow::Result<()> {
//! let today = Local::now().date_naive();
//! let task = Task::new("buy milk", "pending", "shopping", "high", today, today, 0, "2%");
//!
//! let mut tasks = Tasks::new()?;
//! tasks.insert(&task)?;
//! let all = tasks.fetch(PriorityFilter::All)?;
//! # Ok(())
//! # }
//! ```

/// Core database connection and initialization module.
///
/// Provides the `Db` struct that opens the SQLite file in the platform
/// data directory and hands out the connection.
pub mod db;

/// The task repository.
///
/// All statements issued against the `tasks` table: insert with status
/// validation, filtered summaries, single-field updates, exact-match
/// search, deletes, and record lookups.
pub mod tasks;
