//! Configuration management system for the habsync application.
//!
//! Handles application settings and the Habitica service credentials. It
//! supports both programmatic configuration and an interactive setup wizard,
//! with JSON persistence in platform-specific application data directories.
//!
//! ## Configuration Structure
//!
//! The configuration is modular: each integration owns its configuration
//! structure and setup flow, and the root `Config` holds them as optional
//! fields. Unconfigured modules are omitted from the JSON file entirely.
//!
//! ## Storage
//!
//! The configuration file location varies by platform:
//! - **Windows**: `%LOCALAPPDATA%\lacodda\habsync\config.json`
//! - **macOS**: `~/Library/Application Support/lacodda/habsync/config.json`
//! - **Linux**: `~/.local/share/lacodda/habsync/config.json`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! # fn main() -> anyhow::Result<()> {
//! use habsync::libs::config::Config;
//!
//! // Load existing configuration or create default
//! let config = Config::read()?;
//!
//! // Run interactive configuration setup
//! let updated_config = Config::init()?;
//! updated_config.save()?;
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::api::habitica::HabiticaConfig;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module in the application.
///
/// Used during interactive configuration setup to display available modules
/// and route the user's selection to the module's own setup flow.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Main configuration container for the entire application.
///
/// Every integration is optional, so a missing configuration never breaks
/// the application and new integrations can be added without invalidating
/// existing files.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    /// Habitica API credentials and endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub habitica: Option<HabiticaConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Config { habitica: None }
    }
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// Returns a default configuration when no file exists yet, which lets
    /// the application run with credentials supplied purely through
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        // If no configuration file exists, return default configuration
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration to the filesystem.
    ///
    /// Creates the application data directory when needed and writes
    /// pretty-printed JSON so the file stays hand-editable.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file from disk.
    ///
    /// Returns `true` when a file existed and was deleted, `false` when
    /// there was nothing to remove.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(false);
        }

        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Runs an interactive configuration setup wizard.
    ///
    /// Presents a multi-select list of available modules and delegates to
    /// each selected module's setup flow, pre-filling existing values as
    /// defaults. The returned configuration still has to be saved by the
    /// caller.
    pub fn init() -> Result<Self> {
        // Load existing configuration to use as defaults for the setup wizard
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        // Define available configuration modules with their metadata
        let node_descriptions = vec![HabiticaConfig::module()];

        // Present multi-select interface for module selection
        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        // Configure each selected module through its specific setup process
        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "habitica" => config.habitica = Some(HabiticaConfig::init(&config.habitica)?),
                _ => {} // Unknown module keys are safely ignored
            }
        }

        Ok(config)
    }
}
