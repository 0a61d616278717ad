//! Repositories for database operations

use async_trait::async_trait;
use common::error::DatabaseResult;

use crate::models::{Meetup, MeetupListItem, NewMeetup};

pub mod meetup;
pub mod memory;

pub use meetup::MeetupRepository;
pub use memory::InMemoryMeetupStore;

/// Data access for meetups and their associations
#[async_trait]
pub trait MeetupStore: Send + Sync {
    /// All meetups owned by `user_id`, with banner and owner loaded
    async fn find_all_by_owner(&self, user_id: i32) -> DatabaseResult<Vec<MeetupListItem>>;

    /// Find a meetup by ID
    async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<Meetup>>;

    /// Insert a new meetup
    async fn create(&self, new_meetup: &NewMeetup) -> DatabaseResult<Meetup>;

    /// Persist every column of an existing meetup
    async fn update(&self, meetup: &Meetup) -> DatabaseResult<Meetup>;

    /// Delete a meetup, returns whether a row was removed
    async fn delete(&self, id: i32) -> DatabaseResult<bool>;
}
