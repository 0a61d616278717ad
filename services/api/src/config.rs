//! Service settings loaded from the environment

use ::config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Settings of the meetup API service
///
/// # Environment Variables
/// - `MEETUP_HOST`: Interface to bind (default: "0.0.0.0")
/// - `MEETUP_PORT`: Port to listen on (default: 3333)
/// - `MEETUP_JWT_SECRET`: Secret used to verify HS256 tokens
/// - `MEETUP_FILES_BASE_URL`: Base URL under which banner files are served
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub files_base_url: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3333)?
            .set_default("files_base_url", "http://localhost:3333")?
            .add_source(Environment::with_prefix("MEETUP").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        unsafe {
            for key in [
                "MEETUP_HOST",
                "MEETUP_PORT",
                "MEETUP_JWT_SECRET",
                "MEETUP_FILES_BASE_URL",
            ] {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn test_settings_defaults() {
        clear_env();
        unsafe {
            std::env::set_var("MEETUP_JWT_SECRET", "s3cret");
        }

        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.bind_address(), "0.0.0.0:3333");
        assert_eq!(settings.jwt_secret, "s3cret");
        assert_eq!(settings.files_base_url, "http://localhost:3333");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_settings_from_env_overrides() {
        clear_env();
        unsafe {
            std::env::set_var("MEETUP_HOST", "127.0.0.1");
            std::env::set_var("MEETUP_PORT", "8080");
            std::env::set_var("MEETUP_JWT_SECRET", "s3cret");
            std::env::set_var("MEETUP_FILES_BASE_URL", "https://cdn.example.com");
        }

        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.bind_address(), "127.0.0.1:8080");
        assert_eq!(settings.files_base_url, "https://cdn.example.com");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_settings_require_jwt_secret() {
        clear_env();

        assert!(Settings::from_env().is_err());
    }
}
