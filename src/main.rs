use cosmos::configuration::get_configuration;
use cosmos::db::Database;
use cosmos::startup::run;
use cosmos::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("cosmos".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = get_configuration()?;

    let db = Database::connect(&settings.database, &settings.pool);
    let probe = db.clone();
    actix_web::rt::spawn(async move { probe.probe().await });

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener = TcpListener::bind(&address)?;

    let grace = settings.pool.shutdown_grace();
    run(listener, db.clone(), settings)?.await?;

    // The server returns once a termination signal has drained the workers.
    let code = match db.shutdown(grace).await {
        Ok(()) => 0,
        Err(err) => {
            tracing::error!("{}", err);
            1
        }
    };
    std::process::exit(code)
}
