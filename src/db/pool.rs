use super::{with_lease, DbError, Lease};
use crate::configuration::{DatabaseSettings, PoolSettings};
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, PgPool, Postgres};
use std::time::Duration;

/// Process-wide handle to the Postgres connection pool.
///
/// Built once at startup, shared with handlers through `web::Data`, closed
/// by [`Database::shutdown`] once the HTTP server has stopped.
#[derive(Clone, Debug)]
pub struct Database {
    pool: PgPool,
    check_timeout: Duration,
}

const DEFAULT_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

impl Database {
    /// Builds the pool without opening a connection, so an unreachable server
    /// never prevents startup. Connectivity problems surface per checkout.
    pub fn connect(database: &DatabaseSettings, settings: &PoolSettings) -> Self {
        tracing::info!(
            db_host = %database.host,
            db_port = database.port,
            db_name = %database.database_name,
            min_connections = settings.min_connections,
            max_connections = settings.max_connections,
            "Creating connection pool"
        );

        let pool = PgPoolOptions::new()
            .min_connections(settings.min_connections)
            .max_connections(settings.max_connections)
            .idle_timeout(settings.idle_timeout())
            .acquire_timeout(settings.acquire_timeout())
            .connect_lazy_with(database.connect_options());

        Self {
            pool,
            check_timeout: settings.check_timeout(),
        }
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            pool,
            check_timeout: DEFAULT_CHECK_TIMEOUT,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Checks out one connection and pings the server through it.
    ///
    /// Gives up after the configured check timeout instead of waiting out the
    /// pool's acquire timeout, so an unreachable server is reported promptly.
    #[tracing::instrument(name = "Check database connection.", skip(self))]
    pub async fn ping(&self) -> Result<(), DbError> {
        let check = with_lease(self, "ping", |conn| {
            Box::pin(async move { conn.ping().await.map_err(DbError::from) })
        });

        match tokio::time::timeout(self.check_timeout, check).await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!("No connection within {:?}", self.check_timeout);
                Err(DbError::Acquire(sqlx::Error::PoolTimedOut))
            }
        }
    }

    /// Logs whether the pool can reach the server. Never fails.
    pub async fn probe(&self) {
        match self.ping().await {
            Ok(()) => tracing::info!("Connection pool started"),
            Err(err) => tracing::error!("Initialization error: {}", err),
        }
    }

    /// Closes the pool, waiting up to `grace` for checked-out connections.
    pub async fn shutdown(&self, grace: Duration) -> Result<(), DbError> {
        tracing::info!("Terminating");
        match tokio::time::timeout(grace, self.pool.close()).await {
            Ok(()) => {
                tracing::info!("Pool closed");
                Ok(())
            }
            Err(_) => {
                tracing::error!(
                    in_use = (self.pool.size() as usize).saturating_sub(self.pool.num_idle()),
                    "Pool did not close within {:?}",
                    grace
                );
                Err(DbError::ShutdownTimeout(grace))
            }
        }
    }
}

#[async_trait]
impl Lease for Database {
    type Conn = PoolConnection<Postgres>;

    async fn acquire(&self) -> Result<Self::Conn, sqlx::Error> {
        self.pool.acquire().await
    }

    /// Dropping a pooled connection hands it back; this cannot fail.
    async fn release(&self, conn: Self::Conn) -> Result<(), sqlx::Error> {
        drop(conn);
        Ok(())
    }
}
