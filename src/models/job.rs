use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Contract type of a posting (French job-market categories).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Stage,
    Cdi,
    Cdd,
    Freelance,
    Alternance,
}

/// A language requirement attached to a posting, e.g. English / B2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LanguageRequirement {
    #[validate(length(min = 1, message = "Language is required"))]
    pub language: String,
    #[validate(length(min = 1, message = "Level is required"))]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub recruiter_id: Uuid,
    pub title: String,
    pub job_type: JobType,
    pub duration: Option<String>,
    pub location: String,
    pub remote: bool,
    pub description: String,
    pub missions: Option<String>,
    pub profile: Option<String>,
    pub benefits: Option<String>,
    pub education_level: String,
    pub experience_required: Option<String>,
    pub skills: Vec<String>,
    pub languages: Vec<LanguageRequirement>,
    pub expiration_date: DateTime<Utc>,
    pub auto_close: bool,
    pub email_notifications: bool,
    pub created_at: i64,
}
