//! Validated scalar field types shared by the roster entities.
//!
//! Bounds mirror the published validation rules: person and course text
//! fields accept 2 to 255 characters, email addresses must match a basic
//! mailbox pattern. Construction is the only way to obtain a value, so a
//! held instance is always valid.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const TEXT_MIN: usize = 2;
const TEXT_MAX: usize = 255;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$")
            .unwrap_or_else(|err| panic!("email pattern must compile: {err}"))
    })
}

/// Validation errors returned by the field constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValidationError {
    TooShort { min: usize },
    TooLong { max: usize },
    InvalidEmail,
}

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { min } => write!(f, "must be at least {min} characters"),
            Self::TooLong { max } => write!(f, "must be at most {max} characters"),
            Self::InvalidEmail => write!(f, "must be a valid email address"),
        }
    }
}

impl std::error::Error for FieldValidationError {}

fn check_text_bounds(value: &str) -> Result<(), FieldValidationError> {
    let length = value.chars().count();
    if length < TEXT_MIN {
        return Err(FieldValidationError::TooShort { min: TEXT_MIN });
    }
    if length > TEXT_MAX {
        return Err(FieldValidationError::TooLong { max: TEXT_MAX });
    }
    Ok(())
}

macro_rules! define_bounded_text {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and construct from borrowed or owned input.
            pub fn new(value: impl Into<String>) -> Result<Self, FieldValidationError> {
                let value = value.into();
                check_text_bounds(&value)?;
                Ok(Self(value))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.0.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = FieldValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

define_bounded_text! {
    /// A person's first or last name.
    PersonName
}

define_bounded_text! {
    /// A course's display name.
    CourseName
}

define_bounded_text! {
    /// A course's free-text description.
    CourseDescription
}

/// A teacher's contact email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct from borrowed or owned input.
    pub fn new(value: impl Into<String>) -> Result<Self, FieldValidationError> {
        let value = value.into();
        if !email_pattern().is_match(&value) {
            return Err(FieldValidationError::InvalidEmail);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = FieldValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Al")]
    #[case("Lee")]
    fn person_names_accept_two_character_minimum(#[case] value: &str) {
        PersonName::new(value).expect("valid name");
    }

    #[rstest]
    fn person_names_reject_single_characters() {
        let err = PersonName::new("A").expect_err("too short");
        assert_eq!(err, FieldValidationError::TooShort { min: 2 });
    }

    #[rstest]
    fn person_names_reject_overlong_values() {
        let err = PersonName::new("x".repeat(256)).expect_err("too long");
        assert_eq!(err, FieldValidationError::TooLong { max: 255 });
    }

    #[rstest]
    fn bounds_count_characters_not_bytes() {
        // Two multibyte characters satisfy the two-character minimum.
        PersonName::new("馬力").expect("two characters");
    }

    #[rstest]
    #[case("teacher@school.edu")]
    #[case("first.last+tag@sub-domain.example.com")]
    fn email_accepts_common_shapes(#[case] value: &str) {
        EmailAddress::new(value).expect("valid email");
    }

    #[rstest]
    #[case("plainaddress")]
    #[case("missing@tld")]
    #[case("@no-local.example.com")]
    fn email_rejects_malformed_values(#[case] value: &str) {
        let err = EmailAddress::new(value).expect_err("invalid email");
        assert_eq!(err, FieldValidationError::InvalidEmail);
    }

    #[rstest]
    fn bounded_text_round_trips_through_serde() {
        let name = CourseName::new("Databases").expect("valid name");
        let value = serde_json::to_value(&name).expect("serialise");
        let back: CourseName = serde_json::from_value(value).expect("deserialise");
        assert_eq!(back, name);
    }

    #[rstest]
    fn bounded_text_rejects_invalid_values_during_deserialisation() {
        let result: Result<CourseName, _> = serde_json::from_value(serde_json::json!("x"));
        assert!(result.is_err());
    }
}
