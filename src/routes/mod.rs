mod application;
mod health;
mod job;
mod user;

pub use application::{apply_to_job, get_my_applications};
pub use health::health_check;
pub use job::{create_job, delete_job, get_job, get_jobs};
pub use user::{get_current_user, login, password_strength, register};
