//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use url::Url;

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a connection pool (clones
/// share the pool) and `Url` is a small owned string.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Application base URL for generating resource locations.
    pub app_url: Url,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `app_url` - Application base URL
    pub fn new(db: DatabaseConnection, app_url: Url) -> Self {
        Self { db, app_url }
    }

    /// Absolute URL of the pet resource with the given id.
    ///
    /// # Returns
    /// - `String` - `{app_url}/pets/{id}`, keeping any path prefix of `app_url`
    pub fn pet_location(&self, id: i32) -> String {
        let base = self.app_url.as_str().trim_end_matches('/');
        format!("{}/pets/{}", base, id)
    }
}
