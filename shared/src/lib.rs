//! PassField Shared Library
//!
//! This crate contains the toolkit-independent core of the PassField input
//! screen: password validation, the deferred validation gate, field display
//! models and the screen controller, plus the configuration and logging used
//! by the front ends.
//!
//! # Features
//!
//! - **Validation**: Fixed password policy evaluated as a pure function
//! - **Validation Gate**: Errors become visible only after an explicit trigger
//! - **Fields**: Labeled text field and masked password field display models
//! - **Screen**: Controller owning all screen state, driven by messages
//!
//! # Usage
//!
//! ```rust
//! use passfield_shared::{validate, ValidationGate};
//!
//! assert!(validate("Abcdefg1?").is_valid());
//!
//! let mut gate = ValidationGate::new();
//! gate.on_value_change("short");
//! assert!(!gate.should_show_error());
//!
//! gate.trigger();
//! assert!(gate.should_show_error());
//! ```

pub mod config;
pub mod field;
pub mod logging;
pub mod screen;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::{AppConfig, ConfigManager, UiConfig};
pub use field::{
    FieldStyle, FieldView, GateState, InputField, PasswordField, ValidationGate,
};
pub use logging::{LogFormat, LogLevel, LoggingConfig};
pub use screen::{Screen, ScreenMessage, ScreenView};
pub use validation::{
    validate, PasswordPolicy, PasswordRule, RuleId, ValidationResult, Validator,
    PASSWORD_RULES,
};

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types used throughout the library
pub mod error {
    use thiserror::Error;

    /// Common error type for shared library operations
    #[derive(Error, Debug)]
    pub enum SharedError {
        #[error("Configuration error: {0}")]
        Config(#[from] ConfigError),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
    }

    /// Configuration-related errors
    #[derive(Error, Debug)]
    pub enum ConfigError {
        #[error("Invalid configuration: {field} - {reason}")]
        Invalid { field: String, reason: String },

        #[error("Configuration parsing failed: {0}")]
        Parse(#[from] toml::de::Error),

        #[error("Configuration serialization failed: {0}")]
        Serialize(#[from] toml::ser::Error),

        #[error("Configuration has not been loaded")]
        NotLoaded,
    }

    /// Result type alias for shared library operations
    pub type SharedResult<T> = Result<T, SharedError>;
}

pub use error::{ConfigError, SharedError, SharedResult};
