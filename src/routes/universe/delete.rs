use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use actix_web::{delete, web, Responder, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Delete universe.", skip(db))]
#[delete("/delete-universe")]
pub async fn delete_handler(
    form: web::Json<forms::universe::DeleteUniverse>,
    db: web::Data<db::Database>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<()>::build().form_error(errors.to_string()));
    }

    db::universe::delete(db.get_ref(), form.into_inner().name)
        .await
        .map(|_| JsonResponse::<()>::build().ok())
        .map_err(|err| JsonResponse::<()>::build().db_error(err))
}
