//! Password validation for PassField
//!
//! This module holds the fixed password policy used by the password field.
//! Validation is a pure function of the candidate string: every rule is
//! evaluated, and the messages of the failing rules are collected in rule
//! order. An empty result means the password is acceptable.

use std::fmt;

use unicode_general_category::{get_general_category, GeneralCategory};

/// Minimum password length in characters
pub const MIN_LENGTH: usize = 8;

/// Characters accepted by the special character rule
pub const SPECIAL_CHARACTERS: &str = "?=#/%";

/// Separator used when joining rule messages for display
pub const MESSAGE_SEPARATOR: &str = "\n";

/// Identifier of a single password rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    /// Password has at least [`MIN_LENGTH`] characters
    MinLength,
    /// Password contains an uppercase letter
    HasUppercase,
    /// Password contains a digit
    HasDigit,
    /// Password contains one of [`SPECIAL_CHARACTERS`]
    HasSpecial,
}

impl RuleId {
    /// Stable identifier used in logs and machine output
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::MinLength => "min_length",
            RuleId::HasUppercase => "has_uppercase",
            RuleId::HasDigit => "has_digit",
            RuleId::HasSpecial => "has_special",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named predicate a password must satisfy
#[derive(Clone, Copy)]
pub struct PasswordRule {
    /// Rule identifier
    pub id: RuleId,
    /// Message shown to the user while the rule is not met
    pub message: &'static str,
    check: fn(&str) -> bool,
}

impl PasswordRule {
    /// Check whether the password satisfies this rule
    pub fn is_satisfied(&self, password: &str) -> bool {
        (self.check)(password)
    }
}

impl fmt::Debug for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordRule")
            .field("id", &self.id)
            .field("message", &self.message)
            .finish()
    }
}

fn has_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}

fn has_uppercase(password: &str) -> bool {
    password.chars().any(char::is_uppercase)
}

/// Decimal digits only (category Nd); fractions, superscripts and numeral
/// letters do not count
fn has_digit(password: &str) -> bool {
    password
        .chars()
        .any(|c| get_general_category(c) == GeneralCategory::DecimalNumber)
}

fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

/// The fixed rule set, in evaluation and display order
pub const PASSWORD_RULES: [PasswordRule; 4] = [
    PasswordRule {
        id: RuleId::MinLength,
        message: "• at least 8 characters",
        check: has_min_length,
    },
    PasswordRule {
        id: RuleId::HasUppercase,
        message: "• at least 1 uppercase character",
        check: has_uppercase,
    },
    PasswordRule {
        id: RuleId::HasDigit,
        message: "• at least 1 digit",
        check: has_digit,
    },
    PasswordRule {
        id: RuleId::HasSpecial,
        message: "• at least 1 special character ? = # / %",
        check: has_special,
    },
];

/// Outcome of validating a password
///
/// Holds the messages of the rules that were not satisfied, in rule order.
/// Results produced by custom validators may carry messages without rule ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    failed_rules: Vec<RuleId>,
    messages: Vec<String>,
}

impl ValidationResult {
    /// A result with no failures
    pub fn valid() -> Self {
        Self::default()
    }

    /// Build a result from free-form messages (used by custom validators)
    pub fn from_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            failed_rules: Vec::new(),
            messages: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether every rule passed
    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether there are no failure messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of failure messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Failure messages in rule order
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Identifiers of the failed built-in rules
    pub fn failed_rules(&self) -> &[RuleId] {
        &self.failed_rules
    }

    /// Whether the given rule is among the failures
    pub fn has_failed(&self, rule: RuleId) -> bool {
        self.failed_rules.contains(&rule)
    }

    /// Messages joined for the error display surface, empty when valid
    pub fn error_text(&self) -> String {
        self.messages.join(MESSAGE_SEPARATOR)
    }

    fn push(&mut self, rule: &PasswordRule) {
        self.failed_rules.push(rule.id);
        self.messages.push(rule.message.to_string());
    }
}

/// Anything that can check a password and report unmet requirements
pub trait Validator {
    fn validate(&self, password: &str) -> ValidationResult;
}

impl<F> Validator for F
where
    F: Fn(&str) -> ValidationResult,
{
    fn validate(&self, password: &str) -> ValidationResult {
        self(password)
    }
}

/// The default password policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordPolicy;

impl PasswordPolicy {
    /// Rules enforced by this policy
    pub fn rules(&self) -> &'static [PasswordRule] {
        &PASSWORD_RULES
    }
}

impl Validator for PasswordPolicy {
    fn validate(&self, password: &str) -> ValidationResult {
        let mut result = ValidationResult::valid();
        for rule in self.rules() {
            if !rule.is_satisfied(password) {
                result.push(rule);
            }
        }
        result
    }
}

/// Validate a password against the default policy
pub fn validate(password: &str) -> ValidationResult {
    PasswordPolicy.validate(password)
}
