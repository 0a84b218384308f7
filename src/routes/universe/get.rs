use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{get, post, web, Responder, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Get universes.", skip(db))]
#[get("/universe")]
pub async fn list_handler(db: web::Data<db::Database>) -> Result<impl Responder> {
    db::universe::fetch_all(db.get_ref())
        .await
        .map(|universes| {
            let rows = universes
                .into_iter()
                .map(Into::into)
                .collect::<Vec<views::UniverseRow>>();

            JsonResponse::build().set_list(rows).ok()
        })
        .map_err(|err| JsonResponse::<views::UniverseRow>::build().db_error(err))
}

#[tracing::instrument(name = "Get universe names.", skip(db))]
#[get("/get-universe")]
pub async fn names_handler(db: web::Data<db::Database>) -> Result<impl Responder> {
    db::universe::fetch_names(db.get_ref())
        .await
        .map(|names| {
            let rows = names
                .into_iter()
                .map(Into::into)
                .collect::<Vec<views::UniverseNameRow>>();

            JsonResponse::build().set_list(rows).ok()
        })
        .map_err(|err| JsonResponse::<views::UniverseNameRow>::build().db_error(err))
}

#[tracing::instrument(name = "Project universe columns.", skip(db))]
#[post("/project-universe")]
pub async fn project_handler(
    form: web::Json<forms::universe::Projection>,
    db: web::Data<db::Database>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<serde_json::Value>::build().form_error(errors.to_string()));
    }

    let columns = form
        .columns()
        .map_err(|err| JsonResponse::<serde_json::Value>::build().bad_request(err))?;

    db::universe::project(db.get_ref(), columns)
        .await
        .map(|rows| JsonResponse::build().set_list(rows).ok())
        .map_err(|err| JsonResponse::<Vec<serde_json::Value>>::build().db_error(err))
}
