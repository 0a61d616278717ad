//! Meetup models for the API service

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Banner, Owner};

/// Meetup entity
#[derive(Debug, Clone, PartialEq)]
pub struct Meetup {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub file_id: Option<i32>,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Meetup {
    /// Whether the meetup already took place, at full precision
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.date < now
    }

    pub fn is_owned_by(&self, user_id: i32) -> bool {
        self.user_id == user_id
    }

    /// Apply the fields present in `changes`, leaving the others untouched
    pub fn apply(&mut self, changes: UpdateMeetup, now: DateTime<Utc>) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(location) = changes.location {
            self.location = location;
        }
        if let Some(date) = changes.date {
            self.date = date;
        }
        if let Some(file_id) = changes.file_id {
            self.file_id = Some(file_id);
        }
        self.updated_at = now;
    }
}

/// Validated body of a create request
#[derive(Debug, Clone, PartialEq)]
pub struct CreateMeetupRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub file_id: i32,
}

impl CreateMeetupRequest {
    pub fn into_new_meetup(self, user_id: i32) -> NewMeetup {
        NewMeetup {
            title: self.title,
            description: self.description,
            location: self.location,
            date: self.date,
            file_id: Some(self.file_id),
            user_id,
        }
    }
}

/// New meetup creation payload
#[derive(Debug, Clone, PartialEq)]
pub struct NewMeetup {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub file_id: Option<i32>,
    pub user_id: i32,
}

/// Meetup update payload, absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateMeetup {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub file_id: Option<i32>,
}

/// Response body of create and update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetupSummary {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: DateTime<Utc>,
}

impl From<Meetup> for MeetupSummary {
    fn from(m: Meetup) -> Self {
        Self {
            title: m.title,
            description: m.description,
            location: m.location,
            date: m.date,
        }
    }
}

/// Meetup listing entry with its banner and owner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetupListItem {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub file_id: Option<i32>,
    pub user_id: i32,
    pub banner: Option<Banner>,
    pub user: Owner,
}
