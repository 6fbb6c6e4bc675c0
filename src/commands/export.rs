//! Export command: write every task to a CSV or JSON file.

use crate::db::tasks::Tasks;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,
    /// Output file path (default: tasks_<today>.<ext> in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let tasks = Tasks::new()?.all()?;

    if tasks.is_empty() {
        msg_info!(Message::NothingToExport);
        return Ok(());
    }

    let exporter = Exporter::new(args.format.unwrap_or(ExportFormat::Csv), args.output);
    let path = exporter.export(&tasks)?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
