use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or to create a table.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// The test context was used before its database was initialized.
    #[error("Test database has not been initialized")]
    DatabaseNotInitialized,
}
