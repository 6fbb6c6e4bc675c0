//! Info command: the full record for a single task.

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct InfoArgs {
    /// ID of the task to show
    id: Option<i32>,
}

pub fn cmd(args: InfoArgs) -> Result<()> {
    let task_id = match args.id {
        Some(id) => id,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskId.to_string())
            .interact_text()?,
    };

    match Tasks::new()?.get_by_id(task_id)? {
        Some(task) => {
            msg_print!(Message::TaskDetailsHeader(task_id), true);
            View::task(&task)?;
        }
        None => {
            msg_warning!(Message::TaskNotFoundWithId(task_id));
        }
    }

    Ok(())
}
