//! Update command: overwrite one field of one task.
//!
//! The repository applies no validation on this path (status included) and
//! silently affects zero rows for an unknown ID; both behaviors are part of
//! the persisted contract, so this command reports success unconditionally
//! and surfaces the affected-row count only in debug mode.

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::tags;
use crate::libs::task::{FieldUpdate, PRIORITIES, VALID_STATUSES};
use crate::{msg_debug, msg_success, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

/// Column selectable for an update.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum UpdateColumn {
    Status,
    Priority,
    Tags,
    DueDate,
    Information,
}

const COLUMN_LABELS: [&str; 5] = ["Status", "Priority", "Tags", "Due Date", "Information"];
const COLUMNS: [UpdateColumn; 5] = [
    UpdateColumn::Status,
    UpdateColumn::Priority,
    UpdateColumn::Tags,
    UpdateColumn::DueDate,
    UpdateColumn::Information,
];

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// ID of the task to update
    id: Option<i32>,
    /// Field to overwrite
    #[arg(short, long, value_enum)]
    field: Option<UpdateColumn>,
    /// New value (parsed as a date for due-date updates)
    #[arg(short, long)]
    value: Option<String>,
}

pub fn cmd(args: UpdateArgs) -> Result<()> {
    let task_id = match args.id {
        Some(id) => id,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskId.to_string())
            .interact_text()?,
    };

    let column = match args.field {
        Some(column) => column,
        None => {
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptUpdateField.to_string())
                .items(&COLUMN_LABELS)
                .default(0)
                .interact()?;
            COLUMNS[selection]
        }
    };

    let update = match build_update(column, args.value)? {
        Some(update) => update,
        None => {
            msg_warning!(Message::CustomTagRequired);
            return Ok(());
        }
    };

    let affected = Tasks::new()?.update_field(task_id, update)?;
    msg_debug!(format!("update affected {} row(s)", affected));

    msg_success!(Message::TaskUpdated);
    Ok(())
}

/// Builds the field overwrite, prompting for the value when it was not
/// given on the command line. Only a due date is parsed; every other value
/// is stored exactly as supplied.
fn build_update(column: UpdateColumn, value: Option<String>) -> Result<Option<FieldUpdate>> {
    let update = match column {
        UpdateColumn::Status => {
            let status = match value {
                Some(value) => value,
                None => {
                    let selection = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptNewStatus.to_string())
                        .items(&VALID_STATUSES)
                        .default(0)
                        .interact()?;
                    VALID_STATUSES[selection].to_string()
                }
            };
            FieldUpdate::Status(status)
        }
        UpdateColumn::Priority => {
            let priority = match value {
                Some(value) => value,
                None => {
                    let selection = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptNewPriority.to_string())
                        .items(&PRIORITIES)
                        .default(0)
                        .interact()?;
                    PRIORITIES[selection].to_string()
                }
            };
            FieldUpdate::Priority(priority)
        }
        UpdateColumn::Tags => {
            let tag = match value {
                Some(value) => value,
                None => match tags::prompt()? {
                    Some(tag) => tag,
                    None => return Ok(None),
                },
            };
            FieldUpdate::Tags(tag)
        }
        UpdateColumn::DueDate => {
            let due: NaiveDate = match value {
                Some(value) => value.parse()?,
                None => Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptDueDate.to_string())
                    .interact_text()?,
            };
            FieldUpdate::DueDate(due)
        }
        UpdateColumn::Information => {
            let information = match value {
                Some(value) => value,
                None => Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptNewInformation.to_string())
                    .allow_empty(true)
                    .interact_text()?,
            };
            FieldUpdate::Information(information)
        }
    };

    Ok(Some(update))
}
