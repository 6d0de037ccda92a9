//! Screen Flow Integration Test
//!
//! Drives the input screen through the same event sequences a user produces
//! (typing, pressing validate, editing again) and checks what the error
//! surface would display after each step.

use passfield_shared::{
    validate, FieldStyle, RuleId, Screen, ScreenMessage, UiConfig, ValidationGate,
    ValidationResult, PASSWORD_RULES,
};

fn type_password(screen: &mut Screen, password: &str) {
    // Each keystroke is a separate value change
    for end in password.char_indices().map(|(i, c)| i + c.len_utf8()) {
        screen.update(ScreenMessage::PasswordChanged(password[..end].to_string()));
    }
}

#[test]
fn test_validate_result_matches_rules() {
    let candidates = [
        "",
        "a",
        "abcdefgh",
        "ABCDEFGH",
        "Abcdefgh",
        "Abcdefg1",
        "Abcdefg?",
        "abcdefg1?",
        "Abcdefg1?",
        "ÄÖÜ12345#",
        "        ",
        "%%%%%%%%",
    ];

    for candidate in candidates {
        let result = validate(candidate);
        let all_pass = PASSWORD_RULES.iter().all(|rule| rule.is_satisfied(candidate));
        assert_eq!(result.is_valid(), all_pass, "{candidate:?}");

        let expected: Vec<RuleId> = PASSWORD_RULES
            .iter()
            .filter(|rule| !rule.is_satisfied(candidate))
            .map(|rule| rule.id)
            .collect();
        assert_eq!(result.failed_rules(), expected.as_slice(), "{candidate:?}");
    }
}

#[test]
fn test_full_session() {
    let mut screen = Screen::new(&UiConfig::default());

    type_password(&mut screen, "abc");
    assert!(!screen.render().password.is_error());

    screen.update(ScreenMessage::ValidatePressed);
    let view = screen.render();
    assert_eq!(view.password.style, FieldStyle::Error);
    assert_eq!(
        view.password.error_text.as_deref(),
        Some(validate("abc").error_text().as_str())
    );

    // Fixing the password hides errors while typing
    type_password(&mut screen, "Abcdefg1?");
    assert!(!screen.render().password.is_error());

    // Validating a good password shows nothing
    screen.update(ScreenMessage::ValidatePressed);
    let view = screen.render();
    assert!(!view.password.is_error());
    assert_eq!(view.password.error_text, None);

    // Breaking it again after validation does not re-show errors by itself
    screen.update(ScreenMessage::PasswordChanged("Abcdefg1".to_string()));
    assert!(!screen.render().password.is_error());

    screen.update(ScreenMessage::ValidatePressed);
    assert_eq!(
        screen.render().password.error_text.as_deref(),
        Some("• at least 1 special character ? = # / %")
    );
}

#[test]
fn test_standard_field_is_independent_of_gate() {
    let mut screen = Screen::new(&UiConfig::default());
    screen.update(ScreenMessage::ValidatePressed);
    screen.update(ScreenMessage::InputChanged("value".to_string()));

    let view = screen.render();
    assert!(!view.input.is_error());
    assert!(view.password.is_error());

    screen.update(ScreenMessage::ErrorTextChanged("Server busy".to_string()));
    let view = screen.render();
    assert!(view.input.is_error());
    assert_eq!(view.input.error_text.as_deref(), Some("Server busy"));
}

#[test]
fn test_custom_config_titles() {
    let ui = UiConfig {
        input_title: "Email".to_string(),
        password_title: "Secret".to_string(),
        placeholder: "Type here".to_string(),
        mask_char: '*',
        validate_label: "Check".to_string(),
    };
    let mut screen = Screen::new(&ui);
    screen.update(ScreenMessage::PasswordChanged("abcd".to_string()));

    let view = screen.render();
    assert_eq!(view.input.title, "Email");
    assert_eq!(view.input.text, "Type here");
    assert_eq!(view.password.title, "Secret");
    assert_eq!(view.password.text, "****");
    assert_eq!(view.validate_label, "Check");
}

#[test]
fn test_custom_validator_screen() {
    let ui = UiConfig::default();
    let mut screen = Screen::with_validator(&ui, |password: &str| {
        if password.chars().count() >= 4 {
            ValidationResult::valid()
        } else {
            ValidationResult::from_messages(["• at least 4 characters"])
        }
    });

    screen.update(ScreenMessage::PasswordChanged("abc".to_string()));
    screen.update(ScreenMessage::ValidatePressed);
    assert_eq!(
        screen.render().password.error_text.as_deref(),
        Some("• at least 4 characters")
    );

    screen.update(ScreenMessage::PasswordChanged("abcd".to_string()));
    screen.update(ScreenMessage::ValidatePressed);
    assert!(!screen.render().password.is_error());
}

#[test]
fn test_gate_reflects_value_at_call_time() {
    let mut gate = ValidationGate::new();
    gate.on_value_change("Abcdefg1?");
    gate.trigger();
    assert!(!gate.should_show_error());

    // Any change disarms, regardless of how many triggers came before
    gate.trigger();
    gate.trigger();
    gate.on_value_change("x");
    assert!(!gate.should_show_error());
    gate.trigger();
    assert!(gate.should_show_error());
}
