pub mod add;
pub mod delete;
pub mod export;
pub mod info;
pub mod init;
pub mod list;
pub mod search;
pub mod update;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "Filter and view tasks")]
    List(list::ListArgs),
    #[command(about = "Update a single task field")]
    Update(update::UpdateArgs),
    #[command(about = "Search for tasks by status, tag, or ID")]
    Search(search::SearchArgs),
    #[command(about = "Delete a task by ID, or all tasks")]
    Delete(delete::DeleteArgs),
    #[command(about = "Show the full record for a task")]
    Info(info::InfoArgs),
    #[command(about = "Export tasks to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Update(args) => update::cmd(args),
            Commands::Search(args) => search::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Info(args) => info::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
