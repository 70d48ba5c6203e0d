//! Field validation for create and update payloads.

use crate::models::EntityInput;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Pragmatic email shape check: local part, one `@`, dotted domain.
fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .expect("email regex is valid")
    })
}

fn is_blank(value: Option<&str>) -> bool {
    value.map(|s| s.trim().is_empty()).unwrap_or(true)
}

/// Validate a payload against the shared field rules. Returns an empty map
/// when the payload is valid; otherwise one message per violated field.
/// All violations are collected, never short-circuited.
pub fn validate(input: &EntityInput) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();

    if is_blank(input.name.as_deref()) {
        errors.insert("name".to_string(), "Name cannot be blank".to_string());
    }
    if is_blank(input.surname.as_deref()) {
        errors.insert("surname".to_string(), "Surname cannot be blank".to_string());
    }
    let email_ok = input
        .email
        .as_deref()
        .map(|e| email_regex().is_match(e))
        .unwrap_or(false);
    if !email_ok {
        errors.insert("email".to_string(), "Email should be valid".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityInput;

    #[test]
    fn valid_input_passes() {
        let input = EntityInput::new("John", "Doe", "john@example.com");
        assert!(validate(&input).is_empty());
    }

    #[test]
    fn blank_name_is_reported() {
        let input = EntityInput::new("", "Doe", "john@example.com");
        let errors = validate(&input);
        assert_eq!(errors.get("name").map(String::as_str), Some("Name cannot be blank"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn whitespace_only_surname_is_blank() {
        let input = EntityInput::new("John", "   ", "john@example.com");
        let errors = validate(&input);
        assert_eq!(
            errors.get("surname").map(String::as_str),
            Some("Surname cannot be blank")
        );
    }

    #[test]
    fn invalid_email_is_reported() {
        for email in ["invalid-email", "a@b", "@example.com", "john@", ""] {
            let input = EntityInput::new("John", "Doe", email);
            let errors = validate(&input);
            assert_eq!(
                errors.get("email").map(String::as_str),
                Some("Email should be valid"),
                "expected {email:?} to be rejected"
            );
        }
    }

    #[test]
    fn all_violations_are_collected() {
        let input = EntityInput::new("", "", "invalid-email");
        let errors = validate(&input);
        assert_eq!(errors.len(), 3);
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("surname"));
        assert!(errors.contains_key("email"));
    }

    #[test]
    fn missing_fields_count_as_blank() {
        let input = EntityInput::default();
        let errors = validate(&input);
        assert_eq!(errors.len(), 3);
    }
}
