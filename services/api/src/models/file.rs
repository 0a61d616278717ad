//! Uploaded file models

use serde::Serialize;

/// Uploaded file entity, used as a meetup banner
#[derive(Debug, Clone)]
pub struct File {
    pub id: i32,
    pub name: String,
    pub path: String,
}

impl File {
    /// Public URL under which the file is served
    pub fn url(&self, base_url: &str) -> String {
        file_url(base_url, &self.path)
    }

    pub fn to_banner(&self, base_url: &str) -> Banner {
        Banner {
            name: self.name.clone(),
            path: self.path.clone(),
            url: self.url(base_url),
        }
    }
}

/// Banner projection embedded in meetup listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub name: String,
    pub path: String,
    pub url: String,
}

pub(crate) fn file_url(base_url: &str, path: &str) -> String {
    format!("{}/files/{}", base_url.trim_end_matches('/'), path)
}
