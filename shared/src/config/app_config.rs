//! Application configuration for PassField
//!
//! All sections use `#[serde(default)]` so a partial or empty config file
//! yields the defaults for anything it leaves out.

use serde::{Deserialize, Serialize};

use crate::field::DEFAULT_MASK_CHAR;
use crate::logging::LoggingConfig;

/// Main application configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// User interface configuration
    pub ui: UiConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Titles and presentation of the screen's fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Title of the standard input field
    pub input_title: String,

    /// Title of the password field
    pub password_title: String,

    /// Placeholder shown in empty fields
    pub placeholder: String,

    /// Character used to mask password input
    pub mask_char: char,

    /// Label of the validate action
    pub validate_label: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            input_title: "Standard".to_string(),
            password_title: "Password".to_string(),
            placeholder: "Placeholder".to_string(),
            mask_char: DEFAULT_MASK_CHAR,
            validate_label: "Validate Pass".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Serialize configuration to TOML text
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
