//! Error responses for the earthquake handlers.

use std::fmt::Display;

use rocket::Responder;
use rocket::http::Status;
use rocket::serde::json::Json;

use super::params::ParamError;
use crate::models::MessageResponse;

/// Everything a handler can fail with.
///
/// `NotFound` carries its own body. `Rejected` and `Store` answer with a bare
/// status so the registered JSON catchers shape the response.
#[derive(Debug, Responder)]
pub enum ApiError {
    #[response(status = 404)]
    NotFound(Json<MessageResponse>),
    Rejected(Status),
    Store(Status),
}

impl ApiError {
    pub fn earthquake_not_found(id: impl Display) -> Self {
        ApiError::NotFound(Json(MessageResponse::earthquake_not_found(id)))
    }
}

impl From<ParamError> for ApiError {
    fn from(e: ParamError) -> Self {
        warn!("Rejected path parameter: {}", e);
        ApiError::Rejected(Status::NotFound)
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(e: diesel::result::Error) -> Self {
        error!("Earthquake store query failed: {:?}", e);
        ApiError::Store(Status::InternalServerError)
    }
}
