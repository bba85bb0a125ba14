use crate::data::StatusResponse;
use crate::router::ErrorResponse;
use log::error;
use rocket::Response;
use rocket::{get, http::ContentType, serde::json::Json};
use rocket::{http::Status, response::Responder};
use roster_api::service::Error;
use std::io::Cursor;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod contacts;
pub mod views;

// Higher prio than the screens and the file server
#[get("/<path..>", rank = 3)]
pub async fn default_api_error_catcher(path: PathBuf) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "not_found",
        format!("We couldn't find the requested path '{}'", path.display()),
        404,
    ))
}

#[get("/")]
pub async fn status() -> Result<Json<StatusResponse>> {
    Ok(Json(StatusResponse {
        app_version: std::env::var("CARGO_PKG_VERSION").unwrap_or(String::from("unknown")),
    }))
}

impl<'r, 'o: 'r> Responder<'r, 'o> for crate::error::Error {
    fn respond_to(self, req: &rocket::Request) -> rocket::response::Result<'o> {
        match self {
            crate::error::Error::Service(e) => ServiceError(e).respond_to(req),
        }
    }
}

pub struct ServiceError(Error);

impl<'r, 'o: 'r> Responder<'r, 'o> for ServiceError {
    fn respond_to(self, req: &rocket::Request) -> rocket::response::Result<'o> {
        match self.0 {
            Error::NoFileForFileUploadId => {
                let body =
                    ErrorResponse::new("bad_request", self.0.to_string(), 400).to_json_string();
                Response::build()
                    .status(Status::BadRequest)
                    .header(ContentType::JSON)
                    .sized_body(body.len(), Cursor::new(body))
                    .ok()
            }
            Error::NotFound => {
                let body =
                    ErrorResponse::new("not_found", "not found".to_string(), 404).to_json_string();
                Response::build()
                    .status(Status::NotFound)
                    .header(ContentType::JSON)
                    .sized_body(body.len(), Cursor::new(body))
                    .ok()
            }
            Error::Validation(msg) => build_validation_response(msg),
            Error::Io(e) => {
                error!("{e}");
                Status::InternalServerError.respond_to(req)
            }
            // for now handle all persistence errors as InternalServerError, there
            // will be cases where we want to handle them differently (eg. 409 Conflict)
            Error::Persistence(e) => {
                error!("{e}");
                Status::InternalServerError.respond_to(req)
            }
        }
    }
}

fn build_validation_response<'o>(msg: String) -> rocket::response::Result<'o> {
    let err_resp = ErrorResponse::new("validation_error", msg, 400);
    let body = err_resp.to_json_string();
    Response::build()
        .status(Status::BadRequest)
        .header(ContentType::JSON)
        .sized_body(body.len(), Cursor::new(body))
        .ok()
}
