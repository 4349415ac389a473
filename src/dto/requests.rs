use crate::models::{JobType, LanguageRequirement, UserRole};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// Registration form payload. The cross-field rules (password confirmation,
/// character classes, terms acceptance) live in `validation::registration`;
/// only the per-field rules are declared here.
#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email format")
    )]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Please confirm your password"))]
    pub confirm_password: String,
    pub role: UserRole,
    pub accept_terms: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct PasswordStrengthRequest {
    pub password: String,
}

/// Job posting form payload. Booleans default at deserialization so a form
/// that omits them never trips validation; the expiration-date rule needs a
/// clock reading and lives in `validation::job_posting`.
#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    #[validate(length(min = 3, max = 100, message = "Title must be 3-100 characters"))]
    pub title: String,
    pub job_type: JobType,
    pub duration: Option<String>,
    #[validate(length(min = 2, max = 100, message = "Location must be 2-100 characters"))]
    pub location: String,
    #[serde(default)]
    pub remote: bool,
    #[validate(length(min = 50, message = "Description must be at least 50 characters"))]
    pub description: String,
    pub missions: Option<String>,
    pub profile: Option<String>,
    pub benefits: Option<String>,
    #[validate(length(min = 1, message = "Education level is required"))]
    pub education_level: String,
    pub experience_required: Option<String>,
    #[validate(length(min = 3, message = "At least 3 skills are required"))]
    pub skills: Vec<String>,
    #[validate(nested)]
    #[serde(default)]
    pub languages: Vec<LanguageRequirement>,
    pub expiration_date: DateTime<Utc>,
    #[serde(default)]
    pub auto_close: bool,
    #[serde(default = "default_email_notifications")]
    pub email_notifications: bool,
}

fn default_email_notifications() -> bool {
    true
}

#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    #[validate(length(max = 2000, message = "Cover letter must be at most 2000 characters"))]
    #[serde(default)]
    pub cover_letter: Option<String>,
}
