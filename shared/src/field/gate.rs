//! Deferred validation gate
//!
//! The gate decides whether validation errors for an input are visible. It
//! starts idle, is armed only by an explicit trigger (the "Validate" action),
//! and drops back to idle on every value change. Errors are shown only while
//! the gate is armed and the current value fails validation.

use std::fmt;

use tracing::debug;

use crate::validation::{PasswordPolicy, ValidationResult, Validator};

/// State of a [`ValidationGate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    /// Errors are hidden
    #[default]
    Idle,
    /// The user asked for validation feedback
    Armed,
}

/// Owns an input value and its `armed` flag
pub struct ValidationGate {
    value: String,
    state: GateState,
    validator: Box<dyn Validator>,
}

impl ValidationGate {
    /// Create an idle gate with an empty value and the default policy
    pub fn new() -> Self {
        Self::with_validator(PasswordPolicy)
    }

    /// Create an idle gate that validates with a custom validator
    pub fn with_validator<V>(validator: V) -> Self
    where
        V: Validator + 'static,
    {
        Self {
            value: String::new(),
            state: GateState::Idle,
            validator: Box::new(validator),
        }
    }

    /// Replace the value and disarm the gate
    pub fn on_value_change(&mut self, new_value: impl Into<String>) {
        self.value = new_value.into();
        if self.state == GateState::Armed {
            debug!("Validation gate disarmed by value change");
        }
        self.state = GateState::Idle;
    }

    /// Arm the gate
    pub fn trigger(&mut self) {
        if self.state == GateState::Idle {
            debug!("Validation gate armed");
        }
        self.state = GateState::Armed;
    }

    /// Whether validation errors should currently be displayed
    pub fn should_show_error(&self) -> bool {
        self.is_armed() && !self.validation().is_empty()
    }

    /// Validation result for the current value, recomputed on every call
    pub fn validation(&self) -> ValidationResult {
        self.validator.validate(&self.value)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        self.state == GateState::Armed
    }
}

impl Default for ValidationGate {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValidationGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The value is a password; never print it
        f.debug_struct("ValidationGate")
            .field("value_len", &self.value.chars().count())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
