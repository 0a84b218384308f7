use crate::db;
use crate::helpers::JsonResponse;
use actix_web::{get, web, Responder, Result};

#[tracing::instrument(name = "Count universes.", skip(db))]
#[get("/count-universe")]
pub async fn count_handler(db: web::Data<db::Database>) -> Result<impl Responder> {
    db::universe::count(db.get_ref())
        .await
        .map(|count| JsonResponse::<()>::build().set_count(count).ok())
        .map_err(|err| {
            JsonResponse::<()>::build()
                .set_count(-1)
                .internal_server_error(err.to_string())
        })
}
