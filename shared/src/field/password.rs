//! Password field with deferred validation

use crate::field::gate::ValidationGate;
use crate::field::input::{compose_view, FieldView};
use crate::validation::{ValidationResult, Validator};

/// Default character used to mask password input
pub const DEFAULT_MASK_CHAR: char = '•';

/// A single-line masked field validated through a [`ValidationGate`]
#[derive(Debug)]
pub struct PasswordField {
    title: String,
    message: Option<String>,
    placeholder: Option<String>,
    mask_char: char,
    gate: ValidationGate,
}

impl PasswordField {
    /// Create a password field using the default policy
    pub fn new(title: impl Into<String>) -> Self {
        Self::from_gate(title, ValidationGate::new())
    }

    /// Create a password field with a custom validator
    pub fn with_validator<V>(title: impl Into<String>, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        Self::from_gate(title, ValidationGate::with_validator(validator))
    }

    fn from_gate(title: impl Into<String>, gate: ValidationGate) -> Self {
        Self {
            title: title.into(),
            message: None,
            placeholder: None,
            mask_char: DEFAULT_MASK_CHAR,
            gate,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    /// Replace the value; hides any visible validation errors
    pub fn on_value_change(&mut self, value: impl Into<String>) {
        self.gate.on_value_change(value);
    }

    /// Request validation feedback
    pub fn trigger(&mut self) {
        self.gate.trigger();
    }

    pub fn should_show_error(&self) -> bool {
        self.gate.should_show_error()
    }

    pub fn validation(&self) -> ValidationResult {
        self.gate.validation()
    }

    pub fn value(&self) -> &str {
        self.gate.value()
    }

    pub fn gate(&self) -> &ValidationGate {
        &self.gate
    }

    /// Snapshot the field for display
    ///
    /// The error text is derived from the current value on every call.
    pub fn render(&self) -> FieldView {
        let validation = self.gate.validation();
        let error = self.gate.is_armed() && !validation.is_empty();
        let error_text = if error {
            Some(validation.error_text())
        } else {
            None
        };
        let masked: String = std::iter::repeat(self.mask_char)
            .take(self.gate.value().chars().count())
            .collect();

        compose_view(
            &self.title,
            self.message.as_deref(),
            self.placeholder.as_deref(),
            &masked,
            error,
            error_text,
            true,
        )
    }
}
