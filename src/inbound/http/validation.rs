//! Shared validation helpers for inbound HTTP adapters.
//!
//! All request parsing failures become `invalid_request` domain errors with
//! a `details` object naming the offending field and a stable failure code.

use serde_json::json;
use uuid::Uuid;

use crate::domain::fields::{
    CourseDescription, CourseName, EmailAddress, FieldValidationError, PersonName,
};
use crate::domain::ids::CourseId;
use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
    TooShort,
    TooLong,
    InvalidEmail,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::TooShort => "too_short",
            ErrorCode::TooLong => "too_long",
            ErrorCode::InvalidEmail => "invalid_email",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

fn field_error(field: FieldName, message: String, code: ErrorCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn field_error_with_value(
    field: FieldName,
    message: String,
    code: ErrorCode,
    value: &str,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        format!("missing required field: {name}"),
        ErrorCode::MissingField,
    )
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    field_error_with_value(
        field,
        format!("{name} must be a valid UUID"),
        ErrorCode::InvalidUuid,
        value,
    )
}

fn invalid_uuid_index_error(field: FieldName, index: usize, value: &str) -> Error {
    let name = field.as_str();
    Error::invalid_request(format!("{name} must contain valid UUIDs")).with_details(json!({
        "field": name,
        "index": index,
        "value": value,
        "code": ErrorCode::InvalidUuid.as_str(),
    }))
}

fn text_error(field: FieldName, err: &FieldValidationError) -> Error {
    let name = field.as_str();
    let code = match err {
        FieldValidationError::TooShort { .. } => ErrorCode::TooShort,
        FieldValidationError::TooLong { .. } => ErrorCode::TooLong,
        FieldValidationError::InvalidEmail => ErrorCode::InvalidEmail,
    };
    field_error(field, format!("{name} {err}"), code)
}

pub(crate) fn parse_uuid(value: &str, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(value).map_err(|_| invalid_uuid_error(field, value))
}

/// Parse a list of course identifiers, dropping duplicates while keeping
/// first-occurrence order; stored course sets never hold repeats.
pub(crate) fn parse_course_id_list(
    values: Vec<String>,
    field: FieldName,
) -> Result<Vec<CourseId>, Error> {
    let mut ids: Vec<CourseId> = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        let parsed = Uuid::parse_str(&value)
            .map(CourseId::from_uuid)
            .map_err(|_| invalid_uuid_index_error(field, index, &value))?;
        if !ids.contains(&parsed) {
            ids.push(parsed);
        }
    }
    Ok(ids)
}

pub(crate) fn parse_person_name(value: String, field: FieldName) -> Result<PersonName, Error> {
    PersonName::new(value).map_err(|err| text_error(field, &err))
}

pub(crate) fn parse_course_name(value: String, field: FieldName) -> Result<CourseName, Error> {
    CourseName::new(value).map_err(|err| text_error(field, &err))
}

pub(crate) fn parse_course_description(
    value: String,
    field: FieldName,
) -> Result<CourseDescription, Error> {
    CourseDescription::new(value).map_err(|err| text_error(field, &err))
}

pub(crate) fn parse_email(value: String, field: FieldName) -> Result<EmailAddress, Error> {
    EmailAddress::new(value).map_err(|err| text_error(field, &err))
}
