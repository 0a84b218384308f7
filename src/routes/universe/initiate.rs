use crate::db;
use crate::helpers::JsonResponse;
use actix_web::{post, web, Responder, Result};

#[tracing::instrument(name = "Initiate universe table.", skip(db))]
#[post("/initiate-universe")]
pub async fn initiate_handler(db: web::Data<db::Database>) -> Result<impl Responder> {
    db::universe::initiate(db.get_ref())
        .await
        .map(|_| JsonResponse::<()>::build().ok())
        .map_err(|err| JsonResponse::<()>::build().internal_server_error(err.to_string()))
}
