//! API models for request and response payloads

pub mod file;
pub mod meetup;
pub mod user;

pub use file::{Banner, File};
pub use meetup::{
    CreateMeetupRequest, Meetup, MeetupListItem, MeetupSummary, NewMeetup, UpdateMeetup,
};
pub use user::{Owner, User};
