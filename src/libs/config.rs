//! Configuration management for the todo-suite application.
//!
//! Configuration is process-wide state with a load-once lifecycle: `main`
//! calls [`Config::load`] before dispatching a command and then passes the
//! resulting struct (or the relevant part of it) into store and service
//! constructors. Nothing reads configuration from ambient globals afterwards.
//!
//! ## Sources
//!
//! 1. `config.json` in the platform data directory (see [`DataStorage`])
//! 2. Environment overrides, optionally loaded from a `.env` file:
//!    - `TODO_SUITE_DB`: path of the SQLite database file
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use todo_suite::libs::config::Config;
//!
//! let config = Config::load()?;
//! let db_path = config.database.resolve_path()?;
//! println!("Using database at {}", db_path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::todo::StatusFilter;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_FILE_NAME: &str = "todo-suite.db";

/// Environment variable overriding the database location.
pub const DB_PATH_ENV: &str = "TODO_SUITE_DB";

/// Where the todo store keeps its data.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct DatabaseConfig {
    /// Explicit database file. `None` means `<data dir>/todo-suite.db`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl DatabaseConfig {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()) }
    }

    /// Returns the database file path, creating its parent directory if needed.
    pub fn resolve_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() && !parent.exists() {
                        fs::create_dir_all(parent)?;
                    }
                }
                Ok(path.clone())
            }
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }
}

/// Defaults for the `list` command.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ListConfig {
    /// Status filter used when `--status` is not given. Unknown values mean `all`.
    #[serde(default = "default_status")]
    pub default_status: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            default_status: default_status(),
        }
    }
}

fn default_status() -> String {
    StatusFilter::All.as_str().to_string()
}

impl ListConfig {
    pub fn status_filter(&self) -> StatusFilter {
        StatusFilter::parse(Some(&self.default_status))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<ListConfig>,
}

impl Config {
    /// Reads `config.json`, falling back to defaults when the file does not exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Startup entry point: the saved file plus environment overrides.
    pub fn load() -> Result<Config> {
        let mut config = Self::read()?;
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(path) = env::var(DB_PATH_ENV) {
            if !path.trim().is_empty() {
                tracing::debug!(path = %path, "database path overridden from environment");
                self.database.path = Some(PathBuf::from(path));
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Default status filter for listing, `all` when unset.
    pub fn default_status(&self) -> StatusFilter {
        self.list.as_ref().map(ListConfig::status_filter).unwrap_or_default()
    }

    /// Interactive setup wizard. Current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        msg_print!(Message::ConfigModuleDatabase);
        let current_path = config.database.resolve_path()?;
        let path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(current_path.display().to_string())
            .interact_text()?;
        config.database.path = Some(PathBuf::from(path.trim()));

        msg_print!(Message::ConfigModuleList);
        let filters = StatusFilter::ALL;
        let current = filters.iter().position(|f| *f == config.default_status()).unwrap_or(0);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultStatus.to_string())
            .items(&filters.iter().map(|f| f.as_str()).collect::<Vec<_>>())
            .default(current)
            .interact()?;
        config.list = Some(ListConfig {
            default_status: filters[selection].as_str().to_string(),
        });

        Ok(config)
    }
}
