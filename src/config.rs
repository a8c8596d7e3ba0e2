//! Configuration management for datepick
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::calendar::NameTables;
use crate::constants::{
    APP_DIR_NAME, CONFIG_GENERATED, DEFAULT_CLOSE_GRACE_MS, DEFAULT_FIELD_ID, DEFAULT_LABEL, DEFAULT_YEAR_SPAN,
    LOCAL_CONFIG_FILE, MAX_CLOSE_GRACE_MS, MAX_YEAR_SPAN,
};
use crate::picker::{DateFormat, PickerOptions};
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub picker: PickerConfig,
    pub ui: UiConfig,
    pub names: NamesConfig,
    pub logging: LoggingConfig,
}

/// Picker behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Days added to today for the initial selection
    pub initial_days_offset: i64,
    /// Grace window in milliseconds between a click outside and the close
    pub close_grace_ms: u64,
    /// Number of past years offered by the year selector
    pub year_span: u32,
    /// Format of the committed value
    pub format: DateFormat,
}

/// Where the label sits relative to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    #[default]
    Left,
    Right,
    Center,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Label shown above the field
    pub label: String,
    /// Identifier of the field, used in log lines
    pub id: String,
    pub label_position: LabelPosition,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

/// Optional replacement name tables
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NamesConfig {
    /// Twelve month names, January first
    pub months: Option<Vec<String>>,
    /// Seven weekday names, Sunday first
    pub weekdays: Option<Vec<String>>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Maximum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_days_offset: 0,
            close_grace_ms: DEFAULT_CLOSE_GRACE_MS,
            year_span: DEFAULT_YEAR_SPAN,
            format: DateFormat::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            id: DEFAULT_FIELD_ID.to_string(),
            label_position: LabelPosition::default(),
            mouse_enabled: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level).with_context(|| format!("Invalid logging level '{}'", self.level))
    }
}

impl NamesConfig {
    /// Build the name tables, falling back to English for missing parts
    pub fn name_tables(&self) -> Result<Arc<NameTables>> {
        if self.months.is_none() && self.weekdays.is_none() {
            return Ok(NameTables::english());
        }
        let english = NameTables::english();
        let months = self.months.clone().unwrap_or_else(|| english.months().to_vec());
        let weekdays = self
            .weekdays
            .clone()
            .unwrap_or_else(|| (0..7).map(|i| english.weekday_name(i).to_string()).collect());
        Ok(Arc::new(NameTables::new(months, weekdays)?))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.picker.close_grace_ms > MAX_CLOSE_GRACE_MS {
            anyhow::bail!(
                "close_grace_ms cannot exceed {} ms, got {}",
                MAX_CLOSE_GRACE_MS,
                self.picker.close_grace_ms
            );
        }

        if self.picker.year_span > MAX_YEAR_SPAN {
            anyhow::bail!(
                "year_span cannot exceed {} years, got {}",
                MAX_YEAR_SPAN,
                self.picker.year_span
            );
        }

        self.picker
            .format
            .formatter()
            .with_context(|| format!("Invalid locale '{}'", self.picker.format.locale))?;

        self.names.name_tables()?;
        self.logging.level_filter()?;

        if self.ui.id.trim().is_empty() {
            anyhow::bail!("ui.id cannot be empty");
        }

        Ok(())
    }

    /// Options for constructing the picker state machine
    pub fn picker_options(&self) -> Result<PickerOptions> {
        Ok(PickerOptions {
            format: self.picker.format.clone(),
            close_grace: Duration::from_millis(self.picker.close_grace_ms),
            initial_days_offset: self.picker.initial_days_offset,
            year_span: self.picker.year_span,
            names: self.names.name_tables()?,
        })
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# datepick Configuration File\n# Generated on {}\n\n",
            datetime::format_ymd(datetime::today())
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
