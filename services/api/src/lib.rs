//! Meetup API service
//!
//! Lists, creates, updates and deletes the meetups of the authenticated user.

pub mod config;
pub mod error;
pub mod meetups;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod schedule;
pub mod state;
pub mod validation;

pub use routes::create_router;
pub use state::AppState;
