use validator::Validate;

use super::{FieldError, collect_field_errors};
use crate::dto::RegisterRequest;

/// Character-class rules checked one by one so a password missing several
/// classes reports every missing class, not just the first.
const PASSWORD_RULES: &[(&str, fn(&str) -> bool)] = &[
    (
        "Password must contain at least one uppercase letter",
        has_uppercase,
    ),
    (
        "Password must contain at least one lowercase letter",
        has_lowercase,
    ),
    ("Password must contain at least one digit", has_digit),
];

fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Validates a registration submission. Field-level rules run first, then
/// the refinements; all violations are collected into one sorted list.
pub fn validate_registration(request: &RegisterRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = match request.validate() {
        Ok(()) => Vec::new(),
        Err(field_errors) => collect_field_errors(&field_errors),
    };

    for (message, check) in PASSWORD_RULES {
        if !check(&request.password) {
            errors.push(FieldError::new("password", *message));
        }
    }

    // The mismatch attaches to confirm_password so the form annotates the
    // confirmation input rather than a generic error bucket.
    if request.password != request.confirm_password {
        errors.push(FieldError::new("confirm_password", "Passwords do not match"));
    }

    if !request.accept_terms {
        errors.push(FieldError::new(
            "accept_terms",
            "You must accept the terms and conditions",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        errors.sort_by(|a, b| a.field.cmp(&b.field));
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            email: "student@example.com".into(),
            password: "Abcdefg1".into(),
            confirm_password: "Abcdefg1".into(),
            role: UserRole::Student,
            accept_terms: true,
        }
    }

    #[test]
    fn valid_submission_passes() {
        assert!(validate_registration(&valid_request()).is_ok());
    }

    #[test]
    fn mismatched_confirmation_is_the_only_error() {
        let mut request = valid_request();
        request.confirm_password = "Abcdefg2".into();

        let errors = validate_registration(&request).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "confirm_password");
        assert_eq!(errors[0].message, "Passwords do not match");
    }

    #[test]
    fn each_missing_character_class_is_reported() {
        let mut request = valid_request();
        request.password = "abcdefgh".into();
        request.confirm_password = "abcdefgh".into();

        let errors = validate_registration(&request).unwrap_err();
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.field == "password"));
        assert!(messages.contains(&"Password must contain at least one uppercase letter"));
        assert!(messages.contains(&"Password must contain at least one digit"));
    }

    #[test]
    fn short_password_reports_minimum_length() {
        let mut request = valid_request();
        request.password = "Ab1".into();
        request.confirm_password = "Ab1".into();

        let errors = validate_registration(&request).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "password");
        assert_eq!(errors[0].message, "Password must be at least 8 characters");
    }

    #[test]
    fn empty_email_gets_the_required_message() {
        let mut request = valid_request();
        request.email = "".into();

        let errors = validate_registration(&request).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| e.field == "email" && e.message == "Email is required")
        );
    }

    #[test]
    fn malformed_email_gets_the_format_message() {
        let mut request = valid_request();
        request.email = "not-an-email".into();

        let errors = validate_registration(&request).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| e.field == "email" && e.message == "Invalid email format")
        );
    }

    #[test]
    fn declined_terms_are_rejected() {
        let mut request = valid_request();
        request.accept_terms = false;

        let errors = validate_registration(&request).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "accept_terms");
    }

    #[test]
    fn repeated_validation_yields_identical_errors() {
        let mut request = valid_request();
        request.email = "".into();
        request.password = "abc".into();
        request.confirm_password = "other".into();
        request.accept_terms = false;

        let first = validate_registration(&request).unwrap_err();
        let second = validate_registration(&request).unwrap_err();
        assert_eq!(first, second);
    }
}
