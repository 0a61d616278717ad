//! In-memory meetup store, used by tests and local runs without a database

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use common::error::{DatabaseError, DatabaseResult};
use tokio::sync::Mutex;

use super::MeetupStore;
use crate::models::{File, Meetup, MeetupListItem, NewMeetup, User};

// Constraint names PostgreSQL generates for the meetups foreign keys
const FILE_FOREIGN_KEY: &str = "meetups_file_id_fkey";
const USER_FOREIGN_KEY: &str = "meetups_user_id_fkey";

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<i32, User>,
    files: HashMap<i32, File>,
    meetups: BTreeMap<i32, Meetup>,
    next_meetup_id: i32,
}

impl Tables {
    fn check_references(&self, file_id: Option<i32>, user_id: i32) -> DatabaseResult<()> {
        if file_id.is_some_and(|id| !self.files.contains_key(&id)) {
            return Err(DatabaseError::ForeignKeyViolation(FILE_FOREIGN_KEY.to_string()));
        }
        if !self.users.contains_key(&user_id) {
            return Err(DatabaseError::ForeignKeyViolation(USER_FOREIGN_KEY.to_string()));
        }
        Ok(())
    }
}

/// Meetup store keeping every table in process memory
#[derive(Debug, Clone)]
pub struct InMemoryMeetupStore {
    files_base_url: String,
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryMeetupStore {
    pub fn new(files_base_url: impl Into<String>) -> Self {
        Self {
            files_base_url: files_base_url.into(),
            tables: Arc::new(Mutex::new(Tables::default())),
        }
    }

    pub async fn insert_user(&self, user: User) {
        self.tables.lock().await.users.insert(user.id, user);
    }

    pub async fn insert_file(&self, file: File) {
        self.tables.lock().await.files.insert(file.id, file);
    }

    /// Store a meetup as-is, bypassing every business rule
    pub async fn insert_meetup(&self, meetup: Meetup) {
        let mut tables = self.tables.lock().await;
        tables.next_meetup_id = tables.next_meetup_id.max(meetup.id);
        tables.meetups.insert(meetup.id, meetup);
    }

    pub async fn meetups(&self) -> Vec<Meetup> {
        self.tables.lock().await.meetups.values().cloned().collect()
    }
}

#[async_trait]
impl MeetupStore for InMemoryMeetupStore {
    async fn find_all_by_owner(&self, user_id: i32) -> DatabaseResult<Vec<MeetupListItem>> {
        let tables = self.tables.lock().await;

        tables
            .meetups
            .values()
            .filter(|m| m.user_id == user_id)
            .map(|m| -> DatabaseResult<MeetupListItem> {
                let owner = tables.users.get(&m.user_id).ok_or_else(|| {
                    DatabaseError::Configuration(format!("meetup {} has no owner", m.id))
                })?;

                Ok(MeetupListItem {
                    id: m.id,
                    title: m.title.clone(),
                    description: m.description.clone(),
                    location: m.location.clone(),
                    date: m.date,
                    file_id: m.file_id,
                    user_id: m.user_id,
                    banner: m
                        .file_id
                        .and_then(|id| tables.files.get(&id))
                        .map(|f| f.to_banner(&self.files_base_url)),
                    user: owner.to_owner(),
                })
            })
            .collect()
    }

    async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<Meetup>> {
        Ok(self.tables.lock().await.meetups.get(&id).cloned())
    }

    async fn create(&self, new_meetup: &NewMeetup) -> DatabaseResult<Meetup> {
        let mut tables = self.tables.lock().await;
        tables.check_references(new_meetup.file_id, new_meetup.user_id)?;
        tables.next_meetup_id += 1;

        let now = Utc::now();
        let meetup = Meetup {
            id: tables.next_meetup_id,
            title: new_meetup.title.clone(),
            description: new_meetup.description.clone(),
            location: new_meetup.location.clone(),
            date: new_meetup.date,
            file_id: new_meetup.file_id,
            user_id: new_meetup.user_id,
            created_at: now,
            updated_at: now,
        };

        tables.meetups.insert(meetup.id, meetup.clone());
        Ok(meetup)
    }

    async fn update(&self, meetup: &Meetup) -> DatabaseResult<Meetup> {
        let mut tables = self.tables.lock().await;
        if tables.meetups.contains_key(&meetup.id) {
            tables.check_references(meetup.file_id, meetup.user_id)?;
        }

        match tables.meetups.get_mut(&meetup.id) {
            Some(stored) => {
                *stored = meetup.clone();
                Ok(meetup.clone())
            }
            None => Err(DatabaseError::Query(sqlx::Error::RowNotFound)),
        }
    }

    async fn delete(&self, id: i32) -> DatabaseResult<bool> {
        Ok(self.tables.lock().await.meetups.remove(&id).is_some())
    }
}
