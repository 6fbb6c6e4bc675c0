//! Delete command: remove one task by ID, or every task at once.
//!
//! Clearing the whole table asks for confirmation first. Deletion reports
//! success even when no row matched the given ID; the repository treats a
//! missing or zero ID as a no-op rather than an error.

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::DeleteScope;
use crate::{msg_debug, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

const MODE_LABELS: [&str; 2] = ["ID", "All"];

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    id: Option<i32>,
    /// Delete every task
    #[arg(long)]
    all: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    if args.all {
        return delete_all();
    }

    let task_id = match args.id {
        Some(id) => id,
        None => {
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDeleteMode.to_string())
                .items(&MODE_LABELS)
                .default(0)
                .interact()?;
            if MODE_LABELS[selection] == "All" {
                return delete_all();
            }
            Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDeleteId.to_string())
                .interact_text()?
        }
    };

    let deleted = Tasks::new()?.delete(DeleteScope::ById(Some(task_id)))?;
    msg_debug!(format!("delete removed {} row(s)", deleted));

    msg_success!(Message::TaskDeleted);
    Ok(())
}

fn delete_all() -> Result<()> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteAllTasks.to_string())
        .default(false)
        .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let deleted = Tasks::new()?.delete(DeleteScope::All)?;
    msg_debug!(format!("delete removed {} row(s)", deleted));

    msg_success!(Message::TaskDeleted);
    Ok(())
}
