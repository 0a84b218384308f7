use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Rename demotable entry.", skip(db))]
#[post("/update-name-demotable")]
pub async fn rename_handler(
    form: web::Json<forms::demotable::Rename>,
    db: web::Data<db::Database>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<()>::build().form_error(errors.to_string()));
    }

    let forms::demotable::Rename { old_name, new_name } = form.into_inner();
    db::demotable::rename(db.get_ref(), old_name, new_name)
        .await
        .map(|_| JsonResponse::<()>::build().ok())
        .map_err(|err| JsonResponse::<()>::build().db_error(err))
}
