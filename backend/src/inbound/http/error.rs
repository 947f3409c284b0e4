//! HTTP adapter mapping for domain errors.
//!
//! Keeps [`Error`] transport agnostic while handlers return it directly.
//! Every failure becomes a `{"msg": ...}` envelope; the request trace
//! identifier travels in the `trace-id` header.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error, http::StatusCode};
use tracing::{info, warn};

use super::envelope::Envelope;
use crate::domain::{Error, ErrorCode, INVALID_REQUEST_MESSAGE, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest | ErrorCode::CapacityExceeded | ErrorCode::NameTaken => {
            StatusCode::BAD_REQUEST
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        info!(
            code = %self.code(),
            trace_id = self.trace_id().unwrap_or_default(),
            message = self.message(),
            "request rejected"
        );
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(Envelope::new(self.message()))
    }
}

/// Replace actix's plain-text extractor failures with the envelope.
pub(crate) fn json_payload_error(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "rejecting malformed JSON body");
    Error::invalid_request(INVALID_REQUEST_MESSAGE).into()
}

/// Query-string counterpart of [`json_payload_error`].
pub(crate) fn query_payload_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "rejecting malformed query string");
    Error::invalid_request(INVALID_REQUEST_MESSAGE).into()
}
