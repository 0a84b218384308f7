use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::time::Duration;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub pool: PoolSettings,
    pub app_port: u16,
    pub app_host: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
}

/// Sizing and timing of the shared connection pool.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PoolSettings {
    pub min_connections: u32,
    pub max_connections: u32,
    pub idle_timeout_secs: u64,
    pub acquire_timeout_secs: u64,
    /// Upper bound for `/check-db-connection` and the startup probe.
    pub check_timeout_secs: u64,
    pub shutdown_grace_secs: u64,
}

impl DatabaseSettings {
    pub fn without_db(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .ssl_mode(PgSslMode::Prefer)
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        self.without_db().database(&self.database_name)
    }
}

impl PoolSettings {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn check_timeout(&self) -> Duration {
        Duration::from_secs(self.check_timeout_secs)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}

fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
    config::Config::builder()
        .set_default("app_host", "127.0.0.1")?
        .set_default("app_port", 8000)?
        .set_default("database.username", "postgres")?
        .set_default("database.password", "postgres")?
        .set_default("database.host", "127.0.0.1")?
        .set_default("database.port", 5432)?
        .set_default("database.database_name", "cosmos")?
        .set_default("pool.min_connections", 1)?
        .set_default("pool.max_connections", 3)?
        .set_default("pool.idle_timeout_secs", 60)?
        .set_default("pool.acquire_timeout_secs", 60)?
        .set_default("pool.check_timeout_secs", 5)?
        .set_default("pool.shutdown_grace_secs", 10)
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    builder()?
        .add_source(config::File::with_name("configuration").required(false))
        // APP__DATABASE__HOST=db.local sets database.host
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}
