use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    pub student_id: Uuid,
    pub cover_letter: Option<String>,
    pub created_at: i64,
}
