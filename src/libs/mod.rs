//! Core library modules for the tudu application.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Task Domain**: Task types, due-date derivation, text normalization
//! - **User Interface**: Console tables, tag selection, data export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudu::db::tasks::Tasks;
//! use tudu::libs::deadline::pending_days;
//! use tudu::libs::task::Task;
//! use chrono::Local;
//!
//! # fn main() -> anyhow::Result<()> {
//! let today = Local::now().date_naive();
//! let due = today.succ_opt().unwrap();
//! let task = Task::new("water plants", "pending", "personal", "low", due, today, pending_days(due, today), "");
//! Tasks::new()?.insert(&task)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data_storage;
pub mod deadline;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod tags;
pub mod task;
pub mod view;
