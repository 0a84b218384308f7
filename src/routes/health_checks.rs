use crate::db::Database;
use actix_web::{get, web, HttpRequest, HttpResponse};

pub async fn health_check(_req: HttpRequest) -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[tracing::instrument(name = "Check db connection.", skip(db))]
#[get("/check-db-connection")]
pub async fn check_db_connection(db: web::Data<Database>) -> HttpResponse {
    let body = match db.ping().await {
        Ok(()) => "connected",
        Err(_) => "unable to connect",
    };
    HttpResponse::Ok().content_type("text/plain").body(body)
}
