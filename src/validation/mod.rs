//! Form validation core: stateless, side-effect-free checks over submitted
//! form payloads. Per-field rules are declared on the request DTOs with the
//! `validator` derive; cross-field refinements and rules that need a clock
//! reading are composed here. Every rule is evaluated — violations are
//! collected, never short-circuited — so a form can annotate each offending
//! input at once.

mod job_posting;
mod password;
mod registration;

pub use job_posting::validate_job_posting;
pub use password::{PasswordStrength, StrengthReport, classify_password};
pub use registration::validate_registration;

use serde::Serialize;
use validator::{ValidationErrors, ValidationErrorsKind};

/// One violated constraint: the field path it belongs to and a message the
/// form layer can display next to that input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Flattens nested `ValidationErrors` into a list sorted by field path.
/// Entries inside validated collections use `parent[index].child` paths,
/// e.g. `languages[0].level`. Sorting keeps the output identical across
/// repeated validation of the same input.
pub fn collect_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields = Vec::new();
    walk("", errors, &mut fields);
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

fn walk(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(violations) => {
                for violation in violations {
                    let message = violation
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| violation.code.to_string());
                    out.push(FieldError::new(path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(inner) => walk(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    walk(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}
