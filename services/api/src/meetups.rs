//! Meetup operations: validation, business rules and persistence
//!
//! Every operation takes the current time as a parameter so the date rules
//! can be exercised deterministically.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    models::{MeetupListItem, MeetupSummary},
    repositories::MeetupStore,
    schedule::{is_past_hour, starts_before},
    validation::{validate_create_meetup, validate_update_meetup},
};

pub const PAST_DATE: &str = "Past dates are not permitted";
pub const PAST_MEETUP_UPDATE: &str = "You can't update past meetup";
pub const PAST_MEETUP_DELETE: &str = "You can't delete past meetup";
pub const NOT_OWNER_UPDATE: &str = "You don't have permission to cancel this appointment.";
pub const NOT_OWNER_DELETE: &str = "Not authorized.";
pub const MEETUP_NOT_FOUND: &str = "Meetup not found";

/// Meetups owned by `user_id`
pub async fn list_meetups(store: &dyn MeetupStore, user_id: i32) -> ApiResult<Vec<MeetupListItem>> {
    Ok(store.find_all_by_owner(user_id).await?)
}

/// Create a meetup owned by `user_id`
pub async fn create_meetup(
    store: &dyn MeetupStore,
    user_id: i32,
    body: &Value,
    now: DateTime<Utc>,
) -> ApiResult<MeetupSummary> {
    let request = validate_create_meetup(body).map_err(ApiError::Validation)?;

    if is_past_hour(request.date, now) {
        return Err(ApiError::BusinessRule(PAST_DATE));
    }

    let meetup = store.create(&request.into_new_meetup(user_id)).await?;
    info!("Meetup {} created by user {}", meetup.id, user_id);

    Ok(meetup.into())
}

/// Apply a partial update to meetup `id`.
///
/// Both the stored and the new date are rejected once their hour has begun.
/// A body without `date` keeps the stored date and skips the new-date check.
pub async fn update_meetup(
    store: &dyn MeetupStore,
    user_id: i32,
    id: i32,
    body: &Value,
    now: DateTime<Utc>,
) -> ApiResult<MeetupSummary> {
    let changes = validate_update_meetup(body).map_err(ApiError::Validation)?;

    let mut meetup = store
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound(MEETUP_NOT_FOUND))?;

    if starts_before(meetup.date, now) {
        return Err(ApiError::BusinessRule(PAST_MEETUP_UPDATE));
    }

    if changes.date.is_some_and(|date| starts_before(date, now)) {
        return Err(ApiError::BusinessRule(PAST_DATE));
    }

    if !meetup.is_owned_by(user_id) {
        return Err(ApiError::Authorization(NOT_OWNER_UPDATE));
    }

    meetup.apply(changes, now);
    let meetup = store.update(&meetup).await?;
    info!("Meetup {} updated by user {}", meetup.id, user_id);

    Ok(meetup.into())
}

/// Delete meetup `id`
pub async fn delete_meetup(
    store: &dyn MeetupStore,
    user_id: i32,
    id: i32,
    now: DateTime<Utc>,
) -> ApiResult<()> {
    let meetup = store
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound(MEETUP_NOT_FOUND))?;

    if !meetup.is_owned_by(user_id) {
        return Err(ApiError::Authorization(NOT_OWNER_DELETE));
    }

    if meetup.is_past(now) {
        return Err(ApiError::BusinessRule(PAST_MEETUP_DELETE));
    }

    store.delete(meetup.id).await?;
    info!("Meetup {} deleted by user {}", meetup.id, user_id);

    Ok(())
}
