//! Configuration file support for colorf.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/colorf/config.toml`. Settings include user-defined named colors,
//! the alpha convention used for compositing, and output formatting.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::Representation;
pub use types::{CompositingConfig, OutputConfig};

use crate::color::{StraightColor, name_to_color};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [colors]
/// brand = "#ff6600"
/// shadow = "#00000080"
///
/// [compositing]
/// representation = "premultiplied"
///
/// [output]
/// precision = 4
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// User-defined named colors as hex strings (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`)
    #[serde(default)]
    pub colors: BTreeMap<String, String>,

    /// Compositing settings
    #[serde(default)]
    pub compositing: CompositingConfig,

    /// Output formatting
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped or dropped and a warning is logged.
    ///
    /// Validated ranges:
    /// - `output.precision`: 1 - 12
    /// - `colors`: every entry must parse as a hex color
    fn validate_and_clamp(&mut self) {
        // Precision: 1 - 12
        if !(1..=12).contains(&self.output.precision) {
            warn!(
                "Invalid output precision {}, clamping to 1-12 range",
                self.output.precision
            );
            self.output.precision = self.output.precision.clamp(1, 12);
        }

        self.colors.retain(|name, hex| match hex.parse::<StraightColor>() {
            Ok(_) => true,
            Err(err) => {
                warn!("Dropping color '{}': {}", name, err);
                false
            }
        });
    }

    /// Resolves a color given as hex, a user-defined name, or a builtin name.
    ///
    /// User-defined names shadow the builtin palette. Name matching for user
    /// colors is exact; builtin names are case-insensitive.
    pub fn resolve_color(&self, spec: &str) -> Option<StraightColor> {
        if spec.starts_with('#') {
            return spec.parse().ok();
        }
        if let Some(hex) = self.colors.get(spec) {
            return hex.parse().ok();
        }
        name_to_color(spec)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/colorf/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("colorf");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        config.validate_and_clamp();
        Ok(config)
    }

    fn from_toml(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// Returns the JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
