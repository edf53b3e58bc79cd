//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request handler
//! through Axum's state extraction. Handlers build short-lived services borrowing the
//! connection pool instead of holding any request-spanning mutable state.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool handle and the URL is
/// only cloned when a request has no `Host` header.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Application base URL, the fallback origin for hypermedia links.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `app_url` - Application base URL without a trailing slash
    pub fn new(db: DatabaseConnection, app_url: String) -> Self {
        Self { db, app_url }
    }
}
