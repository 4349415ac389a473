mod application;
mod job;
mod user;

pub use application::Application;
pub use job::{Job, JobType, LanguageRequirement};
pub use user::{User, UserRole};
