//! Input screen controller
//!
//! A [`Screen`] owns every piece of mutable state of the input screen: the
//! two text sources that drive the standard field's message and error text,
//! the standard field itself, and the password field with its validation
//! gate. It is created when the screen is entered and dropped when it is
//! left. Front ends translate their input events into [`ScreenMessage`]s and
//! call [`Screen::update`], then draw the [`ScreenView`] from
//! [`Screen::render`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::UiConfig;
use crate::field::{FieldView, InputField, PasswordField};
use crate::validation::Validator;

/// Input events the screen reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenMessage {
    /// The error text source was edited
    ErrorTextChanged(String),
    /// The message source was edited
    MessageChanged(String),
    /// The standard field was edited
    InputChanged(String),
    /// The password field was edited
    PasswordChanged(String),
    /// The validate action was pressed
    ValidatePressed,
}

impl ScreenMessage {
    /// Short name used in logs; never includes the payload
    pub fn kind(&self) -> &'static str {
        match self {
            ScreenMessage::ErrorTextChanged(_) => "error_text_changed",
            ScreenMessage::MessageChanged(_) => "message_changed",
            ScreenMessage::InputChanged(_) => "input_changed",
            ScreenMessage::PasswordChanged(_) => "password_changed",
            ScreenMessage::ValidatePressed => "validate_pressed",
        }
    }
}

/// Everything a front end needs to draw the screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenView {
    /// Raw error text source
    pub error_text: String,
    /// Raw message source
    pub message_text: String,
    /// Standard input field
    pub input: FieldView,
    /// Password field
    pub password: FieldView,
    /// Label of the validate action
    pub validate_label: String,
}

/// Controller for the input screen
#[derive(Debug)]
pub struct Screen {
    error_text: String,
    message_text: String,
    input: InputField,
    password: PasswordField,
    validate_label: String,
}

impl Screen {
    /// Enter the screen using the default password policy
    pub fn new(ui: &UiConfig) -> Self {
        let password = PasswordField::new(ui.password_title.clone());
        Self::with_password_field(ui, password)
    }

    /// Enter the screen with a custom password validator
    pub fn with_validator<V>(ui: &UiConfig, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        let password = PasswordField::with_validator(ui.password_title.clone(), validator);
        Self::with_password_field(ui, password)
    }

    fn with_password_field(ui: &UiConfig, password: PasswordField) -> Self {
        debug!("Entering input screen");
        let mut screen = Self {
            error_text: String::new(),
            message_text: String::new(),
            input: InputField::new(ui.input_title.clone()).with_placeholder(ui.placeholder.clone()),
            password: password
                .with_placeholder(ui.placeholder.clone())
                .with_mask_char(ui.mask_char),
            validate_label: ui.validate_label.clone(),
        };
        screen.sync_derived();
        screen
    }

    /// Apply an input event
    pub fn update(&mut self, message: ScreenMessage) {
        debug!(event = message.kind(), "Screen update");
        match message {
            ScreenMessage::ErrorTextChanged(text) => {
                self.error_text = text;
            }
            ScreenMessage::MessageChanged(text) => {
                self.message_text = text;
            }
            ScreenMessage::InputChanged(value) => {
                self.input.on_value_change(value);
            }
            ScreenMessage::PasswordChanged(value) => {
                self.password.on_value_change(value);
            }
            ScreenMessage::ValidatePressed => {
                self.password.trigger();
            }
        }
        self.sync_derived();
    }

    /// Push the text sources into the fields that display them
    fn sync_derived(&mut self) {
        let has_error = !self.error_text.is_empty();
        let error_text = has_error.then(|| self.error_text.clone());
        self.input.set_error(has_error, error_text);

        // An empty message still occupies the heading slot
        self.input.set_message(Some(self.message_text.clone()));
        self.password.set_message(Some(self.message_text.clone()));
    }

    /// Snapshot the screen for display
    pub fn render(&self) -> ScreenView {
        ScreenView {
            error_text: self.error_text.clone(),
            message_text: self.message_text.clone(),
            input: self.input.render(),
            password: self.password.render(),
            validate_label: self.validate_label.clone(),
        }
    }

    pub fn input(&self) -> &InputField {
        &self.input
    }

    pub fn password(&self) -> &PasswordField {
        &self.password
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        debug!("Leaving input screen");
    }
}
