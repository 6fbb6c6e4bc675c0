//! Tag selection for task forms.
//!
//! Forms offer a fixed preset list (configurable, see `libs::config`) plus a
//! sentinel entry for entering a free-form tag. Presets are stored verbatim;
//! custom tags are title-cased like every other free-text field.

use crate::libs::config::Config;
use crate::libs::formatter::title_case;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

/// Sentinel list entry that switches the form to free-text input.
pub const CUSTOM_TAG_OPTION: &str = "Add Custom Tag";

/// The selectable tag entries: configured presets followed by the sentinel.
pub fn candidates(config: &Config) -> Vec<String> {
    let mut options = config.tag_presets();
    options.push(CUSTOM_TAG_OPTION.to_string());
    options
}

/// Resolves a form selection to the tag value to store.
///
/// A preset selection is returned verbatim (presets are already
/// title-cased). Selecting the sentinel requires `custom_value`; its absence
/// resolves to `None` so the caller can reject the form before any write.
pub fn resolve(selection: &str, custom_value: Option<&str>) -> Option<String> {
    if selection == CUSTOM_TAG_OPTION {
        custom_value.filter(|value| !value.trim().is_empty()).map(title_case)
    } else {
        Some(selection.to_string())
    }
}

/// Interactive tag selection used by the add and update forms.
///
/// Presents the candidate list; choosing the sentinel opens a free-text
/// input. Returns `None` when the custom entry is left empty so the caller
/// can reject the form without writing anything.
pub fn prompt() -> Result<Option<String>> {
    let config = Config::read()?;
    let options = candidates(&config);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptChooseTag.to_string())
        .items(&options)
        .default(0)
        .interact()?;

    let selected = options[selection].as_str();
    if selected == CUSTOM_TAG_OPTION {
        let custom: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCustomTag.to_string())
            .allow_empty(true)
            .interact_text()?;
        Ok(resolve(selected, Some(&custom)))
    } else {
        Ok(resolve(selected, None))
    }
}
