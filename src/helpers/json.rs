use crate::db::DbError;
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde_derive::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct JsonResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) data: Option<Vec<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) message: Option<String>,
}

#[derive(Debug)]
pub(crate) struct JsonResponseBuilder<T> {
    data: Option<Vec<T>>,
    count: Option<i64>,
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub(crate) fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            data: None,
            count: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub(crate) fn set_list(mut self, list: Vec<T>) -> Self {
        self.data = Some(list);
        self
    }

    pub(crate) fn set_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    /// `{data}` for row listings, `{success: true, ..}` otherwise.
    pub(crate) fn ok(self) -> web::Json<JsonResponse<T>> {
        let success = match self.data {
            Some(_) => None,
            None => Some(true),
        };
        web::Json(JsonResponse {
            success,
            data: self.data,
            count: self.count,
            message: None,
        })
    }

    fn error(self, status: StatusCode, message: String) -> actix_web::Error {
        let body = JsonResponse::<T> {
            success: Some(false),
            data: None,
            count: self.count,
            message: Some(message.clone()),
        };
        InternalError::from_response(message, HttpResponse::build(status).json(body)).into()
    }

    pub(crate) fn bad_request<M: Into<String>>(self, message: M) -> actix_web::Error {
        self.error(StatusCode::BAD_REQUEST, message.into())
    }

    pub(crate) fn form_error(self, errors: String) -> actix_web::Error {
        self.bad_request(errors)
    }

    pub(crate) fn not_found<M: Into<String>>(self, message: M) -> actix_web::Error {
        self.error(StatusCode::NOT_FOUND, message.into())
    }

    pub(crate) fn internal_server_error<M: Into<String>>(self, message: M) -> actix_web::Error {
        let message = message.into();
        let message = if message.trim().is_empty() {
            String::from("Internal error")
        } else {
            message
        };
        self.error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// `NoRowsAffected` is a miss, not a fault.
    pub(crate) fn db_error(self, err: DbError) -> actix_web::Error {
        match err {
            DbError::NoRowsAffected => self.not_found("No matching row"),
            err => self.internal_server_error(err.to_string()),
        }
    }
}
