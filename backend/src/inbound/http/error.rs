//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error types HTTP-agnostic while letting Actix handlers
//! turn failures into consistent responses. Generic failures use the JSON
//! envelope `{code, message, traceId, details}`; profile form failures use
//! the form-specific bodies the profile page expects.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::error;

use crate::domain::{
    Error, ErrorCode, INVALID_FORM_DATA_MESSAGE, ProfileUpdateError, TRACE_ID_HEADER,
};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let redacted = Error::internal("Internal server error");
        match error.trace_id() {
            Some(id) => redacted.with_trace_id(id.to_owned()),
            None => redacted,
        }
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(redact_if_internal(self))
    }
}

impl ResponseError for ProfileUpdateError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedInput | Self::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            Self::Persistence(inner) => inner.status_code(),
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::MalformedInput => HttpResponse::BadRequest()
                .json(json!({ "error": INVALID_FORM_DATA_MESSAGE })),
            Self::ValidationFailed { errors, fields } => HttpResponse::BadRequest()
                .json(json!({ "errors": errors, "fields": fields })),
            Self::Persistence(inner) => inner.error_response(),
        }
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

#[cfg(test)]
mod tests;
