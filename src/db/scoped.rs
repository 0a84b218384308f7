//! Connection-scoped execution.
//!
//! Every domain operation runs through [`with_lease`]: one checkout, one unit
//! of work, one release. The release happens on every path where a
//! connection was handed out, including when the unit of work fails.

use super::DbError;
use async_trait::async_trait;
use futures::future::BoxFuture;

/// Something that hands out a resource and takes it back.
#[async_trait]
pub trait Lease: Send + Sync {
    type Conn: Send;

    async fn acquire(&self) -> Result<Self::Conn, sqlx::Error>;

    async fn release(&self, conn: Self::Conn) -> Result<(), sqlx::Error>;
}

/// Runs `work` with a leased connection and releases it afterwards.
///
/// Acquisition and execution failures are logged under `operation` and
/// returned. Release failures are logged only.
pub async fn with_lease<L, T, F>(lease: &L, operation: &'static str, work: F) -> Result<T, DbError>
where
    L: Lease + ?Sized,
    F: for<'c> FnOnce(&'c mut L::Conn) -> BoxFuture<'c, Result<T, DbError>> + Send,
    T: Send,
{
    let mut conn = lease.acquire().await.map_err(|err| {
        tracing::error!(operation, "Failed to acquire connection: {:?}", err);
        DbError::Acquire(err)
    })?;

    let result = work(&mut conn).await;
    match &result {
        Ok(_) => tracing::debug!(operation, "Completed"),
        Err(DbError::NoRowsAffected) => tracing::info!(operation, "No rows affected"),
        Err(err) => tracing::error!(operation, "Failed to execute: {:?}", err),
    }

    if let Err(err) = lease.release(conn).await {
        tracing::error!(operation, "Failed to release connection: {:?}", err);
    }

    result
}
