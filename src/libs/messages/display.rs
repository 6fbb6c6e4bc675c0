//! Display implementation for user-facing messages.
//!
//! All message text lives here, in one place, so wording stays consistent
//! across commands. The success/warning/error prefixes are applied by the
//! macros in `macros.rs`, not by the text itself.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded => "Task added!".to_string(),
            Message::TaskUpdated => "Task updated!".to_string(),
            Message::TaskDeleted => "Deleted successfully!".to_string(),
            Message::TaskNotFoundWithId(id) => format!("No task found with ID {}.", id),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::NoResultsFound => "No results found.".to_string(),
            Message::InvalidStatus(status) => {
                format!("Status must be 'Completed', 'Pending', or 'In Progress' (got '{}').", status)
            }
            Message::TaskNameRequired => "Please enter a task name.".to_string(),
            Message::CustomTagRequired => "Please enter a value for the custom tag.".to_string(),
            Message::TaskListHeader => "My To-Do List".to_string(),
            Message::SearchResultsHeader => "Search results".to_string(),
            Message::TaskDetailsHeader(id) => format!("Task {} details", id),
            Message::ConfirmDeleteAllTasks => "Delete ALL tasks? This cannot be undone".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Tasks exported to: {}", path),
            Message::NothingToExport => "No tasks to export.".to_string(),

            // === PROMPTS ===
            Message::PromptTaskName => "Task name".to_string(),
            Message::PromptTaskInfo => "Task information".to_string(),
            Message::PromptDueDate => "Due date (YYYY-MM-DD)".to_string(),
            Message::PromptStatus => "Status".to_string(),
            Message::PromptPriority => "Priority".to_string(),
            Message::PromptChooseTag => "Choose a tag".to_string(),
            Message::PromptCustomTag => "Enter your custom tag".to_string(),
            Message::PromptTaskId => "Task ID".to_string(),
            Message::PromptUpdateField => "Field to update".to_string(),
            Message::PromptNewStatus => "New status".to_string(),
            Message::PromptNewPriority => "New priority".to_string(),
            Message::PromptNewInformation => "New task information".to_string(),
            Message::PromptSearchBy => "Search by".to_string(),
            Message::PromptSearchStatus => "Status to search for".to_string(),
            Message::PromptSearchTag => "Enter tag value".to_string(),
            Message::PromptSearchId => "Enter task ID to search".to_string(),
            Message::PromptDeleteMode => "Delete type".to_string(),
            Message::PromptDeleteId => "Enter task ID to delete".to_string(),
            Message::PromptTagPresets => "Tag presets (comma separated)".to_string(),
        };
        write!(f, "{}", message)
    }
}
