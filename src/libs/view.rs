use super::deadline::deadline_label;
use super::task::{Task, TaskSummary};
use anyhow::Result;
use prettytable::{row, Table};

/// Terminal table rendering for task data.
pub struct View {}

impl View {
    /// List view: summaries with the deadline label in place of the raw
    /// pending-day count.
    pub fn summaries(tasks: &[TaskSummary]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK NAME", "STATUS", "TAGS", "PRIORITY", "DEADLINE STATUS"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.name,
                task.status,
                task.tags,
                task.priority,
                deadline_label(task.pending_days)
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Full records, one row each. Used by search results.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![
            "ID",
            "TASK NAME",
            "STATUS",
            "TAGS",
            "PRIORITY",
            "DUE DATE",
            "DATE OF ENTRY",
            "PENDING DAYS",
            "INFORMATION"
        ]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.name,
                task.status,
                task.tags,
                task.priority,
                task.due_date,
                task.created_date,
                task.pending_days,
                task.information
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// A single full record. Used by the info command.
    pub fn task(task: &Task) -> Result<()> {
        Self::tasks(std::slice::from_ref(task))
    }
}
