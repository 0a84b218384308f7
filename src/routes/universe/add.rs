use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Add universe.", skip(db))]
#[post("/insert-universe")]
pub async fn add_handler(
    form: web::Json<forms::universe::Universe>,
    db: web::Data<db::Database>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        let errors = errors.to_string();
        tracing::debug!("Invalid data received {:?}", &errors);
        return Err(JsonResponse::<()>::build().form_error(errors));
    }

    let universe: models::Universe = form.into_inner().into();
    db::universe::insert(db.get_ref(), universe)
        .await
        .map(|_| JsonResponse::<()>::build().ok())
        .map_err(|err| JsonResponse::<()>::build().internal_server_error(err.to_string()))
}
