use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("could not acquire a database connection: {0}")]
    Acquire(#[source] sqlx::Error),
    #[error("statement failed: {0}")]
    Execute(#[from] sqlx::Error),
    #[error("no rows affected")]
    NoRowsAffected,
    #[error("connection pool did not close within {0:?}")]
    ShutdownTimeout(Duration),
}

impl DbError {
    /// Single-statement writes succeed only when they touched a row.
    pub fn check_affected(rows_affected: u64) -> Result<(), DbError> {
        match rows_affected {
            0 => Err(DbError::NoRowsAffected),
            _ => Ok(()),
        }
    }
}
