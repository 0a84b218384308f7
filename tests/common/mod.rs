use cosmos::configuration::{get_configuration, DatabaseSettings};
use cosmos::db::Database;
use cosmos::telemetry::{get_subscriber, init_subscriber};
use lazy_static::lazy_static;
use serde_json::Value;
use sqlx::{Connection, Executor, PgConnection, PgPool};

lazy_static! {
    // TEST_LOG=1 cargo t -- --nocapture to see the server's logs
    static ref TRACING: () = {
        let name = "test".to_string();
        let filter = "debug".to_string();
        if std::env::var("TEST_LOG").is_ok() {
            init_subscriber(get_subscriber(name, filter, std::io::stdout));
        } else {
            init_subscriber(get_subscriber(name, filter, std::io::sink));
        }
    };
}

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub database: DatabaseSettings,
    pub client: reqwest::Client,
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect_with(&config.without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    PgPool::connect_with(config.connect_options()).await
}

/// `None` when no Postgres is reachable; callers skip the test.
pub async fn spawn_app() -> Option<TestApp> {
    lazy_static::initialize(&TRACING);

    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let database = configuration.database.clone();
    let db = Database::connect(&configuration.database, &configuration.pool);
    let server = cosmos::startup::run(listener, db, configuration).expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    Some(TestApp {
        address,
        db_pool: connection_pool,
        database,
        client: reqwest::Client::new(),
    })
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(&format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post(&self, path: &str, body: Value) -> reqwest::Response {
        self.client
            .post(&format!("{}{}", &self.address, path))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete(&self, path: &str, body: Value) -> reqwest::Response {
        self.client
            .delete(&format!("{}{}", &self.address, path))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Creates every table, parents first.
    pub async fn initiate_all(&self) {
        for path in [
            "/initiate-universe",
            "/initiate-astronomical",
            "/initiate-galaxy",
            "/initiate-star",
        ] {
            let response = self.post(path, Value::Null).await;
            assert!(response.status().is_success(), "{} failed", path);
        }
    }

    pub async fn data(&self, path: &str) -> Value {
        let response = self.get(path).await;
        assert!(response.status().is_success(), "{} failed", path);
        let body: Value = response.json().await.expect("Response is not json");
        body["data"].clone()
    }
}
