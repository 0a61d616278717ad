//! User models

use serde::Serialize;

/// User entity, owner of meetups
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn to_owner(&self) -> Owner {
        Owner {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Owner projection embedded in meetup listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Owner {
    pub name: String,
    pub email: String,
}
