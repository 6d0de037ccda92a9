//! Plain-text rendering of the screen views

use passfield_shared::{FieldStyle, FieldView, ScreenView};

/// Marker printed after the title of a failing field
const ERROR_MARKER: &str = "[!]";

/// Render a single field as text lines
pub fn render_field(view: &FieldView) -> String {
    let mut out = view.title.clone();
    if let Some(message) = view.message.as_deref().filter(|m| !m.is_empty()) {
        out.push_str("  ");
        out.push_str(message);
    }
    if view.style == FieldStyle::Error {
        out.push(' ');
        out.push_str(ERROR_MARKER);
    }
    out.push('\n');

    if view.is_placeholder {
        out.push_str(&format!("  | <{}> |\n", view.text));
    } else {
        out.push_str(&format!("  | {} |\n", view.text));
    }

    if let Some(error_text) = &view.error_text {
        for line in error_text.lines() {
            out.push_str(&format!("  {line}\n"));
        }
    }

    out
}

/// Render the whole screen
pub fn render_screen(view: &ScreenView) -> String {
    [
        format!("error source:   {:?}\n", view.error_text),
        format!("message source: {:?}\n", view.message_text),
        "\n".to_string(),
        render_field(&view.input),
        "\n".to_string(),
        render_field(&view.password),
        "\n".to_string(),
        format!("[ {} ]\n", view.validate_label),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use passfield_shared::{Screen, ScreenMessage, UiConfig};

    #[test]
    fn test_placeholder_is_bracketed() {
        let view = Screen::new(&UiConfig::default()).render();
        let text = render_field(&view.input);
        assert_eq!(text, "Standard\n  | <Placeholder> |\n");
    }

    #[test]
    fn test_error_field_lists_messages() {
        let mut screen = Screen::new(&UiConfig::default());
        screen.update(ScreenMessage::MessageChanged("Insert password".to_string()));
        screen.update(ScreenMessage::PasswordChanged("Abcdefgh".to_string()));
        screen.update(ScreenMessage::ValidatePressed);

        let text = render_field(&screen.render().password);
        assert_eq!(
            text,
            "Password  Insert password [!]\n  | •••••••• |\n  \
             • at least 1 digit\n  • at least 1 special character ? = # / %\n"
        );
    }

    #[test]
    fn test_screen_layout() {
        let mut screen = Screen::new(&UiConfig::default());
        screen.update(ScreenMessage::ErrorTextChanged("Server busy".to_string()));
        let text = render_screen(&screen.render());
        assert_eq!(
            text,
            "error source:   \"Server busy\"\nmessage source: \"\"\n\n\
             Standard [!]\n  | <Placeholder> |\n  Server busy\n\n\
             Password\n  | <Placeholder> |\n\n\
             [ Validate Pass ]\n"
        );
    }

    #[test]
    fn test_screen_never_prints_password() {
        let mut screen = Screen::new(&UiConfig::default());
        screen.update(ScreenMessage::PasswordChanged("Hunter22?".to_string()));
        let text = render_screen(&screen.render());
        assert!(!text.contains("Hunter22?"));
        assert!(text.contains("[ Validate Pass ]"));
    }
}
