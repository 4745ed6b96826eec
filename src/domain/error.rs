//! Domain-level error type.
//!
//! Transport agnostic: inbound adapters map these errors onto HTTP status
//! codes and response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested entity does not exist.
    NotFound,
    /// A peer update failed after the primary write succeeded, leaving the
    /// bidirectional roster invariant broken until repaired.
    PropagationFailed,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` must be non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use roster::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Student not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Error {
    code: ErrorCode,
    /// Serialised as `error` so clients always receive `{ "error": ... }`.
    #[serde(rename = "error")]
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

/// Validation errors emitted by the fallible constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorValidationError {
    EmptyMessage,
}

impl std::fmt::Display for ErrorValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "error message must not be empty"),
        }
    }
}

impl std::error::Error for ErrorValidationError {}

impl Error {
    /// Create a new error, panicking if validation fails.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            details: None,
        })
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary error details for adapters.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("bad").with_details(json!({ "field": "name" }));
    /// assert!(err.details().is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::PropagationFailed`].
    pub fn propagation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PropagationFailed, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(ErrorCode::InvalidRequest, "invalid_request")]
    #[case(ErrorCode::NotFound, "not_found")]
    #[case(ErrorCode::PropagationFailed, "propagation_failed")]
    #[case(ErrorCode::InternalError, "internal_error")]
    fn codes_serialise_as_snake_case(#[case] code: ErrorCode, #[case] expected: &str) {
        let value = serde_json::to_value(code).expect("serialise code");
        assert_eq!(value, json!(expected));
    }

    #[rstest]
    fn message_serialises_under_error_key() {
        let err = Error::not_found("Student not found");
        let value = serde_json::to_value(&err).expect("serialise error");
        assert_eq!(value["error"], json!("Student not found"));
        assert_eq!(value["code"], json!("not_found"));
        assert!(value.get("details").is_none());
    }

    #[rstest]
    fn try_new_rejects_blank_messages() {
        let err = Error::try_new(ErrorCode::InternalError, "   ").expect_err("blank message");
        assert_eq!(err, ErrorValidationError::EmptyMessage);
    }

    #[rstest]
    fn details_round_trip() {
        let err = Error::invalid_request("bad").with_details(json!({ "field": "firstName" }));
        let value = serde_json::to_value(&err).expect("serialise error");
        assert_eq!(value["details"]["field"], json!("firstName"));
    }
}
