//! Meetup repository for database operations

use async_trait::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::info;

use super::MeetupStore;
use crate::models::{Banner, Meetup, MeetupListItem, NewMeetup, Owner, file::file_url};

const MEETUP_COLUMNS: &str =
    "id, title, description, location, date, file_id, user_id, created_at, updated_at";

/// Meetup repository backed by PostgreSQL
#[derive(Clone)]
pub struct MeetupRepository {
    pool: PgPool,
    files_base_url: String,
}

impl MeetupRepository {
    /// Create a new meetup repository
    pub fn new(pool: PgPool, files_base_url: impl Into<String>) -> Self {
        Self {
            pool,
            files_base_url: files_base_url.into(),
        }
    }

    fn list_item_from_row(&self, row: &PgRow) -> Result<MeetupListItem, sqlx::Error> {
        let banner_name: Option<String> = row.try_get("banner_name")?;
        let banner_path: Option<String> = row.try_get("banner_path")?;

        let banner = match (banner_name, banner_path) {
            (Some(name), Some(path)) => Some(Banner {
                url: file_url(&self.files_base_url, &path),
                name,
                path,
            }),
            _ => None,
        };

        Ok(MeetupListItem {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            location: row.try_get("location")?,
            date: row.try_get("date")?,
            file_id: row.try_get("file_id")?,
            user_id: row.try_get("user_id")?,
            banner,
            user: Owner {
                name: row.try_get("user_name")?,
                email: row.try_get("user_email")?,
            },
        })
    }
}

fn meetup_from_row(row: &PgRow) -> Result<Meetup, sqlx::Error> {
    Ok(Meetup {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        location: row.try_get("location")?,
        date: row.try_get("date")?,
        file_id: row.try_get("file_id")?,
        user_id: row.try_get("user_id")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl MeetupStore for MeetupRepository {
    async fn find_all_by_owner(&self, user_id: i32) -> DatabaseResult<Vec<MeetupListItem>> {
        let rows = sqlx::query(
            r#"
            SELECT m.id, m.title, m.description, m.location, m.date, m.file_id, m.user_id,
                   f.name AS banner_name, f.path AS banner_path,
                   u.name AS user_name, u.email AS user_email
            FROM meetups m
            LEFT JOIN files f ON f.id = m.file_id
            INNER JOIN users u ON u.id = m.user_id
            WHERE m.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        rows.iter()
            .map(|row| self.list_item_from_row(row))
            .collect::<Result<Vec<_>, _>>()
            .map_err(DatabaseError::Query)
    }

    async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<Meetup>> {
        let row = sqlx::query(&format!("SELECT {MEETUP_COLUMNS} FROM meetups WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        row.as_ref()
            .map(meetup_from_row)
            .transpose()
            .map_err(DatabaseError::Query)
    }

    async fn create(&self, new_meetup: &NewMeetup) -> DatabaseResult<Meetup> {
        info!("Creating meetup for user {}", new_meetup.user_id);

        let row = sqlx::query(&format!(
            r#"
            INSERT INTO meetups (title, description, location, date, file_id, user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {MEETUP_COLUMNS}
            "#
        ))
        .bind(&new_meetup.title)
        .bind(&new_meetup.description)
        .bind(&new_meetup.location)
        .bind(new_meetup.date)
        .bind(new_meetup.file_id)
        .bind(new_meetup.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_write)?;

        meetup_from_row(&row).map_err(DatabaseError::Query)
    }

    async fn update(&self, meetup: &Meetup) -> DatabaseResult<Meetup> {
        info!("Updating meetup {}", meetup.id);

        let row = sqlx::query(&format!(
            r#"
            UPDATE meetups
            SET title = $2, description = $3, location = $4, date = $5, file_id = $6,
                updated_at = $7
            WHERE id = $1
            RETURNING {MEETUP_COLUMNS}
            "#
        ))
        .bind(meetup.id)
        .bind(&meetup.title)
        .bind(&meetup.description)
        .bind(&meetup.location)
        .bind(meetup.date)
        .bind(meetup.file_id)
        .bind(meetup.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_write)?;

        meetup_from_row(&row).map_err(DatabaseError::Query)
    }

    async fn delete(&self, id: i32) -> DatabaseResult<bool> {
        info!("Deleting meetup {}", id);

        let result = sqlx::query("DELETE FROM meetups WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        Ok(result.rows_affected() > 0)
    }
}
