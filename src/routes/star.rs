use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{delete, get, post, web, Responder, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Get stars.", skip(db))]
#[get("/star")]
pub async fn list_handler(db: web::Data<db::Database>) -> Result<impl Responder> {
    db::star::fetch_all(db.get_ref())
        .await
        .map(|stars| {
            let rows = stars
                .into_iter()
                .map(Into::into)
                .collect::<Vec<views::StarRow>>();

            JsonResponse::build().set_list(rows).ok()
        })
        .map_err(|err| JsonResponse::<views::StarRow>::build().db_error(err))
}

#[tracing::instrument(name = "Initiate star table.", skip(db))]
#[post("/initiate-star")]
pub async fn initiate_handler(db: web::Data<db::Database>) -> Result<impl Responder> {
    db::star::initiate(db.get_ref())
        .await
        .map(|_| JsonResponse::<()>::build().ok())
        .map_err(|err| JsonResponse::<()>::build().internal_server_error(err.to_string()))
}

#[tracing::instrument(name = "Add star.", skip(db))]
#[post("/insert-star")]
pub async fn add_handler(
    form: web::Json<forms::star::Star>,
    db: web::Data<db::Database>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<()>::build().form_error(errors.to_string()));
    }

    let star: models::Star = form.into_inner().into();
    db::star::insert(db.get_ref(), star)
        .await
        .map(|_| JsonResponse::<()>::build().ok())
        .map_err(|err| JsonResponse::<()>::build().internal_server_error(err.to_string()))
}

#[tracing::instrument(name = "Delete star.", skip(db))]
#[delete("/delete-star")]
pub async fn delete_handler(
    form: web::Json<forms::star::DeleteStar>,
    db: web::Data<db::Database>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<()>::build().form_error(errors.to_string()));
    }

    db::star::delete(db.get_ref(), form.into_inner().solar_name)
        .await
        .map(|_| JsonResponse::<()>::build().ok())
        .map_err(|err| JsonResponse::<()>::build().db_error(err))
}
