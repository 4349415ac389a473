use crate::models::{Application, Job, User};
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Shared in-memory state. `DashMap` handles concurrent access without a
/// global lock; `email_index` gives O(1) login lookups by email.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<DashMap<Uuid, User>>,
    pub jobs: Arc<DashMap<Uuid, Job>>,
    pub applications: Arc<DashMap<Uuid, Application>>,
    pub email_index: Arc<DashMap<String, Uuid>>,
    pub jwt_secret: String,
}

impl AppState {
    pub fn new(jwt_secret: String) -> Self {
        Self {
            users: Arc::new(DashMap::new()),
            jobs: Arc::new(DashMap::new()),
            applications: Arc::new(DashMap::new()),
            email_index: Arc::new(DashMap::new()),
            jwt_secret,
        }
    }
}
