//! Configuration management for PassField
//!
//! Configuration is stored as TOML in the platform config directory
//! (`<config_dir>/passfield/config.toml`). A missing file is not an error;
//! the manager falls back to defaults and only writes when asked to save.

pub mod app_config;

pub use app_config::*;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, SharedResult};

/// Application directory name under the platform config directory
pub const APP_DIR_NAME: &str = "passfield";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Loads, validates and saves the application configuration
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
    app_config: AppConfig,
    loaded: bool,
}

impl ConfigManager {
    /// Create a manager for the given config file path
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            app_config: AppConfig::default(),
            loaded: false,
        }
    }

    /// Create a manager for the platform default config path
    pub fn with_default_path() -> Self {
        Self::new(Self::default_config_path())
    }

    /// Default config file location for the current platform
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Load configuration from file
    ///
    /// If the file doesn't exist, uses the default configuration.
    pub fn load(&mut self) -> SharedResult<&AppConfig> {
        if !self.config_path.exists() {
            debug!(
                "Config file {:?} not found, using defaults",
                self.config_path
            );
            self.app_config = AppConfig::default();
            self.loaded = true;
            return Ok(&self.app_config);
        }

        let text = fs::read_to_string(&self.config_path)?;
        let config = AppConfig::from_toml(&text).map_err(ConfigError::Parse)?;
        validate_config(&config)?;

        info!("Loaded configuration from {:?}", self.config_path);
        self.app_config = config;
        self.loaded = true;
        Ok(&self.app_config)
    }

    /// Save configuration to file, creating parent directories as needed
    pub fn save(&self) -> SharedResult<()> {
        if !self.loaded {
            return Err(ConfigError::NotLoaded.into());
        }
        validate_config(&self.app_config)?;

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = self.app_config.to_toml().map_err(ConfigError::Serialize)?;
        fs::write(&self.config_path, text)?;

        debug!("Saved configuration to {:?}", self.config_path);
        Ok(())
    }

    pub fn config(&self) -> &AppConfig {
        &self.app_config
    }

    pub fn config_mut(&mut self) -> &mut AppConfig {
        &mut self.app_config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

/// Reject configurations the screen cannot render
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let ui = &config.ui;
    if ui.input_title.trim().is_empty() {
        return Err(ConfigError::Invalid {
            field: "ui.input_title".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    if ui.password_title.trim().is_empty() {
        return Err(ConfigError::Invalid {
            field: "ui.password_title".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    if ui.mask_char.is_control() || ui.mask_char.is_whitespace() {
        return Err(ConfigError::Invalid {
            field: "ui.mask_char".to_string(),
            reason: "must be a visible character".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SharedError;
    use crate::logging::{LogFormat, LogLevel};
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = ConfigManager::new(temp_dir.path().join("missing.toml"));
        let config = manager.load().unwrap();
        assert_eq!(config, &AppConfig::default());
        assert!(manager.is_loaded());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "[ui]\npassword_title = \"Secret\"\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let mut manager = ConfigManager::new(&path);
        let config = manager.load().unwrap();
        assert_eq!(config.ui.password_title, "Secret");
        assert_eq!(config.ui.input_title, "Standard");
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut manager = ConfigManager::new(&path);
        manager.load().unwrap();
        manager.config_mut().ui.mask_char = '*';
        manager.save().unwrap();

        let mut reloaded = ConfigManager::new(&path);
        assert_eq!(reloaded.load().unwrap().ui.mask_char, '*');
    }

    #[test]
    fn test_save_before_load_fails() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::new(temp_dir.path().join("config.toml"));
        assert_matches!(
            manager.save(),
            Err(SharedError::Config(ConfigError::NotLoaded))
        );
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[ui\n").unwrap();

        let mut manager = ConfigManager::new(&path);
        assert_matches!(
            manager.load(),
            Err(SharedError::Config(ConfigError::Parse(_)))
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut config = AppConfig::default();
        config.ui.password_title = "  ".to_string();
        assert_matches!(
            validate_config(&config),
            Err(ConfigError::Invalid { field, .. }) if field == "ui.password_title"
        );

        let mut config = AppConfig::default();
        config.ui.mask_char = ' ';
        assert_matches!(
            validate_config(&config),
            Err(ConfigError::Invalid { field, .. }) if field == "ui.mask_char"
        );
    }

    #[test]
    fn test_default_path_ends_with_app_dir() {
        let path = ConfigManager::default_config_path();
        assert!(path.ends_with(Path::new(APP_DIR_NAME).join(CONFIG_FILE_NAME)));
    }
}
