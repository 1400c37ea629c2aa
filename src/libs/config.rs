//! Configuration for pricebook.
//!
//! The configuration is a small JSON file in the application data directory.
//! It is optional: a missing file yields the defaults, so a fresh install
//! works without running `pricebook init`.
//!
//! ```rust,no_run
//! use pricebook::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("database file: {}", config.database().file_name);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default name of the SQLite file holding the product tables.
pub const DEFAULT_DB_FILE_NAME: &str = "pricebook.db3";

/// Database settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    /// File name inside the application data directory.
    pub file_name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            file_name: DEFAULT_DB_FILE_NAME.to_string(),
        }
    }
}

/// Root configuration object. Unconfigured sections are omitted from the file.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
}

impl Config {
    /// Reads the configuration file, or returns the defaults if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = Self::path()?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(format!("{}: {}", Message::ConfigParseError, e)))
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = Self::path()?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_file_path, json).map_err(|e| msg_error_anyhow!(format!("{}: {}", Message::ConfigSaveError, e)))?;

        Ok(())
    }

    /// Interactive setup: prompts for each setting, pre-filled with the
    /// current value.
    pub fn init() -> Result<Config> {
        let mut config = Config::read()?;
        let current = config.database();

        let file_name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabaseFileName.to_string())
            .default(current.file_name)
            .validate_with(|input: &String| -> Result<(), String> {
                if input.trim().is_empty() {
                    Err(Message::InvalidInput("file name must not be empty".to_string()).to_string())
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        config.database = Some(DatabaseConfig { file_name });
        Ok(config)
    }

    /// Effective database settings, falling back to the defaults.
    pub fn database(&self) -> DatabaseConfig {
        self.database.clone().unwrap_or_default()
    }

    /// Full path of the configured database file.
    pub fn database_path(&self) -> Result<PathBuf> {
        DataStorage::new().get_path(&self.database().file_name)
    }

    fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }
}
