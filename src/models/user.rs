use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role. Students browse and apply; recruiters publish postings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Recruiter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub created_at: i64,
}
