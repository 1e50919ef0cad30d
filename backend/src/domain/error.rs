//! Domain-level failure type.
//!
//! Transport agnostic: inbound adapters map [`ErrorCode`] to an HTTP status
//! and serialise the error as the uniform failure envelope
//! `{"success": false, "error": <status>, "message": <text>}`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable failure category carried by every [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Structurally required input is missing or malformed.
    BadRequest,
    /// The requested resource or collection is absent or empty.
    NotFound,
    /// The request is well-formed but cannot be processed.
    UnprocessableEntity,
    /// An unexpected fault inside the service.
    InternalError,
}

impl ErrorCode {
    /// Numeric code reported in the failure envelope, matching the HTTP
    /// status the inbound adapter responds with.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::UnprocessableEntity => 422,
            Self::InternalError => 500,
        }
    }

    /// Default human-readable message for this category.
    #[must_use]
    pub const fn canonical_message(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad request error",
            Self::NotFound => "Not found",
            Self::UnprocessableEntity => "unprocessable",
            Self::InternalError => "Internal server error",
        }
    }
}

/// Domain failure: a category plus a human-readable message.
///
/// # Examples
/// ```
/// use trivia_backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("no questions in the store");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "ErrorEnvelope")]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create an error with an explicit category and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The failure category.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// The human-readable message reported to clients.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::BadRequest`].
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::UnprocessableEntity`].
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnprocessableEntity, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<ErrorCode> for Error {
    /// An error carrying the category's canonical message.
    fn from(code: ErrorCode) -> Self {
        Self::new(code, code.canonical_message())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

/// Wire shape of a failure response.
///
/// Every failed request, regardless of endpoint, serialises to this envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Always `false` on the failure path.
    #[schema(example = false)]
    pub success: bool,
    /// Numeric code matching the HTTP status.
    #[schema(example = 404)]
    pub error: u16,
    /// Human-readable description of the failure.
    #[schema(example = "Not found")]
    pub message: String,
}

impl From<Error> for ErrorEnvelope {
    fn from(error: Error) -> Self {
        Self {
            success: false,
            error: error.code.as_u16(),
            message: error.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ErrorCode::BadRequest, 400, "Bad request error")]
    #[case(ErrorCode::NotFound, 404, "Not found")]
    #[case(ErrorCode::UnprocessableEntity, 422, "unprocessable")]
    #[case(ErrorCode::InternalError, 500, "Internal server error")]
    fn canonical_errors_fill_the_envelope(
        #[case] code: ErrorCode,
        #[case] number: u16,
        #[case] message: &str,
    ) {
        let envelope = ErrorEnvelope::from(Error::from(code));
        assert!(!envelope.success);
        assert_eq!(envelope.error, number);
        assert_eq!(envelope.message, message);
    }

    #[test]
    fn errors_serialise_as_the_failure_envelope() {
        let value = serde_json::to_value(Error::unprocessable("missing required field: answer"))
            .expect("error serialises");
        assert_eq!(
            value,
            serde_json::json!({
                "success": false,
                "error": 422,
                "message": "missing required field: answer",
            })
        );
    }

    #[test]
    fn custom_messages_are_preserved() {
        let err = Error::not_found("no categories");
        assert_eq!(err.message(), "no categories");
        assert_eq!(err.to_string(), "no categories");
    }
}
