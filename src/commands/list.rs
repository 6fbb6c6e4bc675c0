//! List command: the filtered task table.

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::PriorityFilter;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only tasks with this priority
    #[arg(short, long, value_enum)]
    priority: Option<PriorityFilter>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let filter = args.priority.unwrap_or(PriorityFilter::All);
    let tasks = Tasks::new()?.fetch(filter)?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TaskListHeader, true);
    View::summaries(&tasks)?;
    Ok(())
}
