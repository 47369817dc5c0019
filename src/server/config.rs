use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

pub struct Config {
    pub database_url: String,

    /// Public base URL; `Location` headers are built relative to it.
    pub app_url: Url,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - `DATABASE_URL` missing or `APP_URL` invalid
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let app_url_value = lookup("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string());
        let app_url = Url::parse(&app_url_value).map_err(|source| ConfigError::InvalidAppUrl {
            value: app_url_value.clone(),
            source,
        })?;

        Ok(Self {
            database_url,
            app_url,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}
