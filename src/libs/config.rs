//! Application configuration.
//!
//! Settings are stored as JSON in the platform data directory. The only
//! configurable concern is the preset tag list offered by task forms; the
//! defaults match the tags the application ships with. `Config::read` never
//! fails on a missing file, it just falls back to the defaults.

use super::data_storage::DataStorage;
use crate::libs::formatter::title_case;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Preset tags offered before the custom-tag option.
pub const DEFAULT_TAG_PRESETS: [&str; 4] = ["Work", "Personal", "College", "Shopping"];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TagConfig {
    /// Tags offered as fixed choices in task forms. Stored title-cased so
    /// preset selection and custom entry produce the same casing.
    pub presets: Vec<String>,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            presets: DEFAULT_TAG_PRESETS.iter().map(|tag| tag.to_string()).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<TagConfig>,
}

impl Config {
    /// Loads the saved configuration, or the defaults when no file exists.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&config_path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Writes the configuration as pretty JSON into the data directory.
    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(config_path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_path.exists() {
            fs::remove_file(config_path)?;
        }
        Ok(())
    }

    /// Interactive configuration wizard.
    ///
    /// Prompts for the preset tag list as a comma-separated line, with the
    /// current (or default) presets pre-filled. Entries are title-cased to
    /// match stored tag values.
    pub fn init() -> Result<Self> {
        let current = Self::read()?;
        let default_line = current.tag_presets().join(", ");

        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTagPresets.to_string())
            .default(default_line)
            .interact_text()?;

        let presets: Vec<String> = input
            .split(',')
            .map(|tag| title_case(tag.trim()))
            .filter(|tag| !tag.is_empty())
            .collect();

        Ok(Config {
            tags: Some(TagConfig { presets }),
        })
    }

    /// The effective preset tag list: configured presets, or the defaults.
    pub fn tag_presets(&self) -> Vec<String> {
        self.tags
            .as_ref()
            .map(|tags| tags.presets.clone())
            .unwrap_or_else(|| TagConfig::default().presets)
    }
}
