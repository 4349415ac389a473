use chrono::{DateTime, Utc};
use validator::Validate;

use super::{FieldError, collect_field_errors};
use crate::dto::CreateJobRequest;

/// Validates a job posting submission against the rule set and the supplied
/// clock reading. `now` is a parameter rather than an ambient `Utc::now()`
/// call so the function stays pure: handlers pass the real clock, tests pass
/// fixed instants. The expiration rule is therefore time-dependent — a
/// payload that passes at submission can fail if the same payload is
/// validated again after its expiration instant.
pub fn validate_job_posting(
    request: &CreateJobRequest,
    now: DateTime<Utc>,
) -> Result<(), Vec<FieldError>> {
    let mut errors = match request.validate() {
        Ok(()) => Vec::new(),
        Err(field_errors) => collect_field_errors(&field_errors),
    };

    // Strictly after `now`; an expiration equal to the current instant is
    // already unusable.
    if request.expiration_date <= now {
        errors.push(FieldError::new(
            "expiration_date",
            "Expiration date must be in the future",
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
    use crate::models::{JobType, LanguageRequirement};
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
    }

    fn valid_request() -> CreateJobRequest {
        CreateJobRequest {
            title: "Backend Developer Intern".into(),
            job_type: JobType::Stage,
            duration: Some("6 months".into()),
            location: "Paris".into(),
            remote: false,
            description: "Join the platform team to build and maintain the APIs powering the \
                          student job board, from matching to notifications."
                .into(),
            missions: None,
            profile: None,
            benefits: None,
            education_level: "Bachelor".into(),
            experience_required: None,
            skills: vec!["Rust".into(), "PostgreSQL".into(), "Docker".into()],
            languages: Vec::new(),
            expiration_date: Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap(),
            auto_close: false,
            email_notifications: true,
        }
    }

    #[test]
    fn valid_posting_passes() {
        assert!(validate_job_posting(&valid_request(), fixed_now()).is_ok());
    }

    #[test]
    fn two_skills_are_not_enough() {
        let mut request = valid_request();
        request.skills = vec!["Rust".into(), "Docker".into()];

        let errors = validate_job_posting(&request, fixed_now()).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| e.field == "skills" && e.message == "At least 3 skills are required")
        );
    }

    #[test]
    fn title_bounds_are_enforced_both_ways() {
        let mut request = valid_request();
        request.title = "ab".into();
        let errors = validate_job_posting(&request, fixed_now()).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "title"));

        request.title = "x".repeat(101);
        let errors = validate_job_posting(&request, fixed_now()).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "title"));
    }

    #[test]
    fn short_description_is_rejected() {
        let mut request = valid_request();
        request.description = "Too short.".into();

        let errors = validate_job_posting(&request, fixed_now()).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "description"));
    }

    #[test]
    fn blank_language_entries_are_rejected_individually() {
        let mut request = valid_request();
        request.languages = vec![
            LanguageRequirement {
                language: "English".into(),
                level: "B2".into(),
            },
            LanguageRequirement {
                language: "".into(),
                level: "".into(),
            },
        ];

        let errors = validate_job_posting(&request, fixed_now()).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| e.field == "languages[1].language" && e.message == "Language is required")
        );
        assert!(
            errors
                .iter()
                .any(|e| e.field == "languages[1].level" && e.message == "Level is required")
        );
    }

    #[test]
    fn past_expiration_is_rejected() {
        let mut request = valid_request();
        request.expiration_date = fixed_now() - Duration::days(1);

        let errors = validate_job_posting(&request, fixed_now()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "expiration_date");
        assert_eq!(errors[0].message, "Expiration date must be in the future");
    }

    #[test]
    fn expiration_equal_to_now_is_rejected() {
        let mut request = valid_request();
        request.expiration_date = fixed_now();

        let errors = validate_job_posting(&request, fixed_now()).unwrap_err();
        assert_eq!(errors[0].field, "expiration_date");
    }

    // The expiration rule is the one time-dependent rule in the core: the
    // same payload flips from valid to invalid once the supplied clock
    // passes its expiration instant. A past date can never become valid.
    #[test]
    fn deferred_validation_can_invalidate_a_previously_valid_posting() {
        let request = valid_request();
        assert!(validate_job_posting(&request, fixed_now()).is_ok());

        let after_expiry = request.expiration_date + Duration::seconds(1);
        let errors = validate_job_posting(&request, after_expiry).unwrap_err();
        assert_eq!(errors[0].field, "expiration_date");
    }

    #[test]
    fn repeated_validation_yields_identical_errors() {
        let mut request = valid_request();
        request.title = "ab".into();
        request.skills = vec!["Rust".into()];
        request.expiration_date = fixed_now() - Duration::hours(1);

        let first = validate_job_posting(&request, fixed_now()).unwrap_err();
        let second = validate_job_posting(&request, fixed_now()).unwrap_err();
        assert_eq!(first, second);
    }
}
