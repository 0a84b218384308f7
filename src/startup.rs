use crate::configuration::Settings;
use crate::db::Database;
use crate::routes;
use actix_web::{dev::Server, error, web, App, HttpResponse, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

/// Binds the HTTP server. actix stops it on SIGINT / SIGTERM, giving
/// in-flight requests the pool's shutdown grace period to finish.
pub fn run(listener: TcpListener, db: Database, settings: Settings) -> Result<Server, std::io::Error> {
    let db = web::Data::new(db);
    let grace = settings.pool.shutdown_grace_secs;
    let json_config = json_config();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(routes::health_check))
            .service(routes::check_db_connection)
            .service(routes::universe::list_handler)
            .service(routes::universe::names_handler)
            .service(routes::universe::project_handler)
            .service(routes::universe::initiate_handler)
            .service(routes::universe::add_handler)
            .service(routes::universe::delete_handler)
            .service(routes::universe::count_handler)
            .service(routes::astronomical::list_handler)
            .service(routes::astronomical::initiate_handler)
            .service(routes::astronomical::add_handler)
            .service(routes::galaxy::list_handler)
            .service(routes::galaxy::initiate_handler)
            .service(routes::galaxy::add_handler)
            .service(routes::star::list_handler)
            .service(routes::star::initiate_handler)
            .service(routes::star::add_handler)
            .service(routes::star::delete_handler)
            .service(routes::demotable::rename_handler)
            .app_data(json_config.clone())
            .app_data(db.clone())
    })
    .shutdown_timeout(grace)
    .listen(listener)?
    .run();

    Ok(server)
}

/// Malformed or mistyped JSON bodies become a 400 with a JSON error body.
pub(crate) fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = match &err {
            error::JsonPayloadError::Deserialize(inner) => serde_json::json!({
                "success": false,
                "kind": "deserialize",
                "line": inner.line(),
                "column": inner.column(),
                "message": inner.to_string(),
            }),
            other => serde_json::json!({
                "success": false,
                "kind": "other",
                "message": other.to_string(),
            }),
        };
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}
