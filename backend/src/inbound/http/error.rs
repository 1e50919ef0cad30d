//! HTTP mapping for domain errors.
//!
//! Keeps the domain error HTTP-agnostic while letting handlers return it
//! directly: actix renders the uniform failure envelope with the matching
//! status code.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::ports::StoreError;
use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Self::from(ErrorCode::InternalError)
    }
}

/// Map a store failure on a read path: collapsed into NotFound, the kind the
/// surrounding lookups report.
pub(crate) fn store_not_found(err: StoreError) -> Error {
    error!(error = %err, "record store failure on read path");
    Error::not_found(err.to_string())
}

/// Map a store failure on a mutating or filtered path: collapsed into
/// UnprocessableEntity, matching the observed behaviour of the API.
pub(crate) fn store_unprocessable(err: StoreError) -> Error {
    error!(error = %err, "record store failure");
    Error::unprocessable(err.to_string())
}
