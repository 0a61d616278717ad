//! Application state shared across handlers

use std::sync::Arc;

use crate::{middleware::JwtConfig, repositories::MeetupStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub meetup_repository: Arc<dyn MeetupStore>,
    pub jwt: JwtConfig,
}

impl AppState {
    pub fn new(meetup_repository: Arc<dyn MeetupStore>, jwt_secret: &str) -> Self {
        Self {
            meetup_repository,
            jwt: JwtConfig::new(jwt_secret),
        }
    }
}
