// ============================================================================
// JOB-MATCHING PLATFORM API
// ============================================================================

// - Student/recruiter registration and login with password hashing
// - JWT authentication & role-based authorization
// - Job posting submission with full form validation
// - Password strength feedback for the registration form
// - Student applications to open postings
// - Pagination, CORS, structured logging

mod auth;
mod dto;
mod errors;
mod models;
mod routes;
mod states;
mod validation;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::routes::{
    apply_to_job, create_job, delete_job, get_current_user, get_job, get_jobs,
    get_my_applications, health_check, login, password_strength, register,
};
use crate::states::AppState;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    // JWT Secret
    let jwt_secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set!");

    // Create application state
    let state = AppState::new(jwt_secret);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = Router::new()
        // Public routes (no auth required)
        .route("/health", get(health_check))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/password-strength", post(password_strength))
        // Protected routes (auth required)
        .route("/users/me", get(get_current_user))
        .route("/jobs", post(create_job).get(get_jobs))
        .route("/jobs/{id}", get(get_job).delete(delete_job))
        .route("/jobs/{id}/apply", post(apply_to_job))
        .route("/applications/me", get(get_my_applications))
        // Add state and middleware
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /health                  - Health check");
    info!("  POST   /auth/register           - Create account (student/recruiter)");
    info!("  POST   /auth/login              - Login");
    info!("  POST   /auth/password-strength  - Password strength feedback");
    info!("  GET    /users/me                - Get current user (auth)");
    info!("  POST   /jobs                    - Publish job posting (recruiter)");
    info!("  GET    /jobs                    - List open postings (paginated)");
    info!("  GET    /jobs/:id                - Get specific posting");
    info!("  DELETE /jobs/:id                - Delete posting (owner only)");
    info!("  POST   /jobs/:id/apply          - Apply to a posting (student)");
    info!("  GET    /applications/me         - List my applications (student)");

    axum::serve(listener, app).await.unwrap();
}
