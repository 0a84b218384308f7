use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{get, post, web, Responder, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Get galaxies.", skip(db))]
#[get("/galaxy")]
pub async fn list_handler(db: web::Data<db::Database>) -> Result<impl Responder> {
    db::galaxy::fetch_all(db.get_ref())
        .await
        .map(|galaxies| {
            let rows = galaxies
                .into_iter()
                .map(Into::into)
                .collect::<Vec<views::GalaxyRow>>();

            JsonResponse::build().set_list(rows).ok()
        })
        .map_err(|err| JsonResponse::<views::GalaxyRow>::build().db_error(err))
}

#[tracing::instrument(name = "Initiate galaxy table.", skip(db))]
#[post("/initiate-galaxy")]
pub async fn initiate_handler(db: web::Data<db::Database>) -> Result<impl Responder> {
    db::galaxy::initiate(db.get_ref())
        .await
        .map(|_| JsonResponse::<()>::build().ok())
        .map_err(|err| JsonResponse::<()>::build().internal_server_error(err.to_string()))
}

#[tracing::instrument(name = "Add galaxy.", skip(db))]
#[post("/insert-galaxy")]
pub async fn add_handler(
    form: web::Json<forms::galaxy::Galaxy>,
    db: web::Data<db::Database>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<()>::build().form_error(errors.to_string()));
    }

    let galaxy: models::Galaxy = form.into_inner().into();
    db::galaxy::insert(db.get_ref(), galaxy)
        .await
        .map(|_| JsonResponse::<()>::build().ok())
        .map_err(|err| JsonResponse::<()>::build().internal_server_error(err.to_string()))
}
