use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{get, post, web, Responder, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Get astronomical objects.", skip(db))]
#[get("/astronomical")]
pub async fn list_handler(db: web::Data<db::Database>) -> Result<impl Responder> {
    db::astronomical::fetch_all(db.get_ref())
        .await
        .map(|objects| {
            let rows = objects
                .into_iter()
                .map(Into::into)
                .collect::<Vec<views::AstronomicalRow>>();

            JsonResponse::build().set_list(rows).ok()
        })
        .map_err(|err| JsonResponse::<views::AstronomicalRow>::build().db_error(err))
}

#[tracing::instrument(name = "Initiate astronomical object table.", skip(db))]
#[post("/initiate-astronomical")]
pub async fn initiate_handler(db: web::Data<db::Database>) -> Result<impl Responder> {
    db::astronomical::initiate(db.get_ref())
        .await
        .map(|_| JsonResponse::<()>::build().ok())
        .map_err(|err| JsonResponse::<()>::build().internal_server_error(err.to_string()))
}

#[tracing::instrument(name = "Add astronomical object.", skip(db))]
#[post("/insert-astronomical")]
pub async fn add_handler(
    form: web::Json<forms::astronomical::AstronomicalObject>,
    db: web::Data<db::Database>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<()>::build().form_error(errors.to_string()));
    }

    let object: models::AstronomicalObject = form.into_inner().into();
    db::astronomical::insert(db.get_ref(), object)
        .await
        .map(|_| JsonResponse::<()>::build().ok())
        .map_err(|err| JsonResponse::<()>::build().internal_server_error(err.to_string()))
}
