use crate::{
    auth::validate_token,
    dto::{CreateJobRequest, PaginatedResponse, PaginationParams},
    errors::ApiError,
    models::{Job, UserRole},
    states::AppState,
    validation::validate_job_posting,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

/// POST /jobs
/// Headers: Authorization: Bearer <token> (recruiter)
pub async fn create_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<Job>), ApiError> {
    let claims = validate_token(&headers, &state.jwt_secret)?;
    if claims.role != UserRole::Recruiter {
        return Err(ApiError::Forbidden);
    }
    let recruiter_id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::Unauthorized)?;

    // The validator takes the clock reading from the call site; the
    // expiration rule is checked against this instant.
    validate_job_posting(&payload, Utc::now()).map_err(ApiError::Validation)?;

    let job = Job {
        id: Uuid::new_v4(),
        recruiter_id,
        title: payload.title,
        job_type: payload.job_type,
        duration: payload.duration,
        location: payload.location,
        remote: payload.remote,
        description: payload.description,
        missions: payload.missions,
        profile: payload.profile,
        benefits: payload.benefits,
        education_level: payload.education_level,
        experience_required: payload.experience_required,
        skills: payload.skills,
        languages: payload.languages,
        expiration_date: payload.expiration_date,
        auto_close: payload.auto_close,
        email_notifications: payload.email_notifications,
        created_at: Utc::now().timestamp(),
    };

    state.jobs.insert(job.id, job.clone());

    info!("Job posted: {} by recruiter {}", job.id, recruiter_id);

    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /jobs?page=1&limit=10
///
/// Postings with auto_close set are hidden once their expiration passes.
pub async fn get_jobs(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Json<PaginatedResponse<Job>> {
    let now = Utc::now();
    let mut jobs: Vec<Job> = state
        .jobs
        .iter()
        .map(|entry| entry.value().clone())
        .filter(|job| !(job.auto_close && job.expiration_date <= now))
        .collect();

    // Sort by creation date (newest first)
    jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let total = jobs.len();
    let start = (params.page.saturating_sub(1)) * params.limit;
    let end = (start + params.limit).min(total);

    let paginated_jobs = if start < total {
        jobs[start..end].to_vec()
    } else {
        vec![]
    };

    Json(PaginatedResponse {
        data: paginated_jobs,
        page: params.page,
        limit: params.limit,
        total,
    })
}

/// GET /jobs/:id
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Job>, ApiError> {
    let job = state.jobs.get(&id).ok_or(ApiError::NotFound)?;

    Ok(Json(job.clone()))
}

/// DELETE /jobs/:id
/// Headers: Authorization: Bearer <token> (owning recruiter)
pub async fn delete_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let claims = validate_token(&headers, &state.jwt_secret)?;
    let recruiter_id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::Unauthorized)?;

    let job = state.jobs.get(&id).ok_or(ApiError::NotFound)?;

    // Check ownership
    if job.recruiter_id != recruiter_id {
        return Err(ApiError::Forbidden);
    }
    drop(job);

    state.jobs.remove(&id);

    info!("Job deleted: {} by recruiter {}", id, recruiter_id);

    Ok(StatusCode::NO_CONTENT)
}
