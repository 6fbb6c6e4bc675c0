//! # Tudu - a personal to-do list for the terminal
//!
//! A command-line task tracker backed by a local SQLite store.
//!
//! ## Features
//!
//! - **Task Management**: Create, view, filter, update, search, and delete tasks
//! - **Due Dates**: Pending-day tracking with overdue/upcoming deadline labels
//! - **Tag System**: Preset tags plus free-form custom tags
//! - **Priorities**: High / Medium / Low with filtered list views
//! - **Data Export**: Export tasks to CSV and JSON
//! - **Interactive Forms**: Every command doubles as a guided prompt flow
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudu::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
