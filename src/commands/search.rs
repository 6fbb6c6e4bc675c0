//! Search command: exact-match lookup by status, tag, or ID.
//!
//! The search value is matched against the stored column as-is; stored
//! fields are title-cased, so "pending" finds nothing while "Pending" does.

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{SearchQuery, VALID_STATUSES};
use crate::libs::view::View;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

/// Column searchable by the command.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SearchField {
    Status,
    Tags,
    Id,
}

const FIELD_LABELS: [&str; 3] = ["Status", "Tags", "ID"];
const FIELDS: [SearchField; 3] = [SearchField::Status, SearchField::Tags, SearchField::Id];

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Column to match against
    #[arg(short, long, value_enum)]
    by: Option<SearchField>,
    /// Value to match exactly
    #[arg(short, long)]
    value: Option<String>,
}

pub fn cmd(args: SearchArgs) -> Result<()> {
    let field = match args.by {
        Some(field) => field,
        None => {
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSearchBy.to_string())
                .items(&FIELD_LABELS)
                .default(0)
                .interact()?;
            FIELDS[selection]
        }
    };

    let query = match field {
        SearchField::Status => {
            let status = match args.value {
                Some(value) => value,
                None => {
                    let selection = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptSearchStatus.to_string())
                        .items(&VALID_STATUSES)
                        .default(0)
                        .interact()?;
                    VALID_STATUSES[selection].to_string()
                }
            };
            SearchQuery::Status(status)
        }
        SearchField::Tags => {
            let tag = match args.value {
                Some(value) => value,
                None => Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptSearchTag.to_string())
                    .interact_text()?,
            };
            SearchQuery::Tags(tag)
        }
        SearchField::Id => {
            let id: i32 = match args.value {
                Some(value) => value.parse()?,
                None => Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptSearchId.to_string())
                    .interact_text()?,
            };
            SearchQuery::Id(id)
        }
    };

    let results = Tasks::new()?.search(&query)?;

    if results.is_empty() {
        msg_warning!(Message::NoResultsFound);
        return Ok(());
    }

    msg_print!(Message::SearchResultsHeader, true);
    View::tasks(&results)?;
    Ok(())
}
