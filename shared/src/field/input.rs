//! Generic labeled text field

use serde::{Deserialize, Serialize};

/// Visual style of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FieldStyle {
    #[default]
    Default,
    /// Failing-field style: error colored title, value and border
    Error,
}

/// Render-ready snapshot of a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldView {
    /// Field heading
    pub title: String,
    /// Secondary text shown next to the heading
    pub message: Option<String>,
    /// Text shown in the input box (value, masked value or placeholder)
    pub text: String,
    /// Whether `text` is the placeholder rather than the value
    pub is_placeholder: bool,
    /// Field style
    pub style: FieldStyle,
    /// Error text shown under the input box
    pub error_text: Option<String>,
    /// Whether the field accepts a single line only
    pub single_line: bool,
}

impl FieldView {
    pub fn is_error(&self) -> bool {
        self.style == FieldStyle::Error
    }
}

/// A labeled text field whose error state is supplied by the owner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    title: String,
    message: Option<String>,
    placeholder: Option<String>,
    value: String,
    error: bool,
    error_text: Option<String>,
}

impl InputField {
    /// Create a field with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the placeholder shown while the value is empty
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the secondary message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn on_value_change(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    /// Set the error flag and the text displayed while it is set
    pub fn set_error(&mut self, error: bool, error_text: Option<String>) {
        self.error = error;
        self.error_text = error_text;
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    /// Snapshot the field for display
    pub fn render(&self) -> FieldView {
        let error_text = if self.error {
            self.error_text.clone()
        } else {
            None
        };

        compose_view(
            &self.title,
            self.message.as_deref(),
            self.placeholder.as_deref(),
            &self.value,
            self.error,
            error_text,
            false,
        )
    }
}

/// Shared layout of every field view
pub(crate) fn compose_view(
    title: &str,
    message: Option<&str>,
    placeholder: Option<&str>,
    shown_value: &str,
    error: bool,
    error_text: Option<String>,
    single_line: bool,
) -> FieldView {
    let (text, is_placeholder) = match placeholder {
        Some(placeholder) if shown_value.is_empty() => (placeholder.to_string(), true),
        _ => (shown_value.to_string(), false),
    };

    FieldView {
        title: title.to_string(),
        message: message.map(str::to_string),
        text,
        is_placeholder,
        style: if error {
            FieldStyle::Error
        } else {
            FieldStyle::Default
        },
        error_text,
        single_line,
    }
}
