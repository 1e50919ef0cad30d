//! Request-field validation helpers.
//!
//! Required fields are modelled as `Option` on the request DTOs and checked
//! here before any business logic runs, producing a structured error naming
//! the field instead of a sentinel check deep inside the handler.

use crate::domain::Error;

/// Require a field that is structurally optional on the wire; absence is an
/// unprocessable request (422).
pub(crate) fn require_field<T>(value: Option<T>, field: &'static str) -> Result<T, Error> {
    value.ok_or_else(|| Error::unprocessable(format!("missing required field: {field}")))
}

/// Require a quiz-selection field; absence is a malformed request (400).
pub(crate) fn require_quiz_field<T>(value: Option<T>, field: &'static str) -> Result<T, Error> {
    value.ok_or_else(|| Error::bad_request(format!("missing required field: {field}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    #[test]
    fn missing_fields_name_the_field() {
        let err = require_field::<String>(None, "answer").expect_err("absent field");
        assert_eq!(err.code(), ErrorCode::UnprocessableEntity);
        assert_eq!(err.message(), "missing required field: answer");
    }

    #[test]
    fn quiz_fields_fail_as_bad_request() {
        let err =
            require_quiz_field::<Vec<i64>>(None, "previous_questions").expect_err("absent field");
        assert_eq!(err.code(), ErrorCode::BadRequest);
    }

    #[test]
    fn present_fields_pass_through() {
        assert_eq!(require_field(Some(5), "difficulty"), Ok(5));
    }
}
