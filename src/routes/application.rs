use crate::{
    auth::validate_token,
    dto::ApplyRequest,
    errors::ApiError,
    models::{Application, UserRole},
    states::AppState,
    validation::collect_field_errors,
};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// POST /jobs/:id/apply
/// Headers: Authorization: Bearer <token> (student)
/// Body: { "coverLetter": "..." } (optional)
pub async fn apply_to_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(job_id): Path<Uuid>,
    Json(payload): Json<ApplyRequest>,
) -> Result<(StatusCode, Json<Application>), ApiError> {
    let claims = validate_token(&headers, &state.jwt_secret)?;
    if claims.role != UserRole::Student {
        return Err(ApiError::Forbidden);
    }
    let student_id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::Unauthorized)?;

    payload
        .validate()
        .map_err(|e| ApiError::Validation(collect_field_errors(&e)))?;

    {
        let job = state.jobs.get(&job_id).ok_or(ApiError::NotFound)?;
        if job.expiration_date <= Utc::now() {
            return Err(ApiError::JobExpired);
        }
    }

    // One application per student per job
    let already_applied = state
        .applications
        .iter()
        .any(|entry| entry.value().job_id == job_id && entry.value().student_id == student_id);
    if already_applied {
        return Err(ApiError::AlreadyApplied);
    }

    let application = Application {
        id: Uuid::new_v4(),
        job_id,
        student_id,
        cover_letter: payload.cover_letter,
        created_at: Utc::now().timestamp(),
    };

    state.applications.insert(application.id, application.clone());

    info!(
        "Application {} submitted for job {} by student {}",
        application.id, job_id, student_id
    );

    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /applications/me
/// Headers: Authorization: Bearer <token> (student)
pub async fn get_my_applications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Application>>, ApiError> {
    let claims = validate_token(&headers, &state.jwt_secret)?;
    if claims.role != UserRole::Student {
        return Err(ApiError::Forbidden);
    }
    let student_id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::Unauthorized)?;

    let mut applications: Vec<Application> = state
        .applications
        .iter()
        .filter(|entry| entry.value().student_id == student_id)
        .map(|entry| entry.value().clone())
        .collect();

    // Newest first
    applications.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(Json(applications))
}
