//! Add-task command: the create form.
//!
//! Any argument left off the command line is collected interactively, so
//! `tudu add` walks through the same form the flags describe. An empty task
//! name is rejected here, before the repository is reached; an invalid
//! status is rejected by the repository without writing a row.

use crate::db::tasks::Tasks;
use crate::libs::deadline::pending_days;
use crate::libs::messages::Message;
use crate::libs::tags;
use crate::libs::task::{Task, TaskError, PRIORITIES, VALID_STATUSES};
use crate::{msg_error, msg_success, msg_warning};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task name
    name: Option<String>,
    /// Task status (Pending, In Progress, Completed)
    #[arg(short, long)]
    status: Option<String>,
    /// Task priority (High, Medium, Low)
    #[arg(short, long)]
    priority: Option<String>,
    /// Task tag
    #[arg(short, long)]
    tag: Option<String>,
    /// Due date (YYYY-MM-DD)
    #[arg(short, long)]
    due: Option<NaiveDate>,
    /// Free-text notes
    #[arg(short, long)]
    info: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let name = match args.name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskName.to_string())
            .allow_empty(true)
            .interact_text()?,
    };
    if name.trim().is_empty() {
        msg_warning!(Message::TaskNameRequired);
        return Ok(());
    }

    let tag = match args.tag {
        Some(tag) => tag,
        None => match tags::prompt()? {
            Some(tag) => tag,
            None => {
                msg_warning!(Message::CustomTagRequired);
                return Ok(());
            }
        },
    };

    let due: NaiveDate = match args.due {
        Some(due) => due,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDueDate.to_string())
            .interact_text()?,
    };

    let information = match args.info {
        Some(info) => info,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskInfo.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    let status = match args.status {
        Some(status) => status,
        None => {
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptStatus.to_string())
                .items(&VALID_STATUSES)
                .default(0)
                .interact()?;
            VALID_STATUSES[selection].to_string()
        }
    };

    let priority = match args.priority {
        Some(priority) => priority,
        None => {
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPriority.to_string())
                .items(&PRIORITIES)
                .default(0)
                .interact()?;
            PRIORITIES[selection].to_string()
        }
    };

    let today = Local::now().date_naive();
    let task = Task::new(&name, &status, &tag, &priority, due, today, pending_days(due, today), &information);

    match Tasks::new()?.insert(&task) {
        Ok(_) => {
            msg_success!(Message::TaskAdded);
        }
        Err(TaskError::InvalidStatus(status)) => {
            msg_error!(Message::InvalidStatus(status));
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
