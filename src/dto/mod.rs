mod requests;
mod responses;

pub use requests::{
    ApplyRequest, CreateJobRequest, LoginRequest, PasswordStrengthRequest, RegisterRequest,
};
pub use responses::{AuthResponse, PaginatedResponse, PaginationParams, UserResponse};
