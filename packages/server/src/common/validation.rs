//! Request-body validation helpers.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// A request field failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Implemented by request inputs that must be checked before any work is done
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// At least `min` characters (not bytes), ignoring surrounding whitespace
pub fn require_min_chars(
    field: &'static str,
    value: &str,
    min: usize,
) -> Result<(), ValidationError> {
    if value.trim().chars().count() < min {
        return Err(ValidationError::new(
            field,
            format!("must be at least {} characters", min),
        ));
    }
    Ok(())
}

lazy_static! {
    // Anchored: dotted domain of alphanumeric labels, inner hyphens only
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"(?i)^[A-Z0-9._%+-]+@(?:[A-Z0-9](?:[A-Z0-9-]*[A-Z0-9])?\.)+[A-Z]{2,}$"
    ).unwrap();
}

pub fn require_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if EMAIL_REGEX.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::new(field, "must be a valid email address"))
    }
}

/// Lower-cased, trimmed email used for storage and lookup
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_min_chars() {
        assert!(require_min_chars("password", "12345678", 8).is_ok());
        assert!(require_min_chars("password", "1234567", 8).is_err());
        assert!(require_min_chars("fullName", "  a  ", 2).is_err());
        assert!(require_min_chars("fullName", "Zoë", 2).is_ok());
    }

    #[test]
    fn test_require_email() {
        assert!(require_email("email", "pat@example.com").is_ok());
        assert!(require_email("email", " pat@mail.example.org ").is_ok());
        assert!(require_email("email", "pat.doe+care@my-clinic.co.uk").is_ok());

        for bad in [
            "",
            "pat",
            "@example.com",
            "pat@",
            "pat@example",
            "pat@@example.com",
            "p at@example.com",
            "pat@.com",
            "pat@example..com",
            "pat@-.com",
            "pat@example-.com",
            "pat@example.c",
        ] {
            assert!(require_email("email", bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_error_message_names_field() {
        let err = require_min_chars("fullName", "a", 2).unwrap_err();
        assert_eq!(err.to_string(), "Invalid fullName: must be at least 2 characters");
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Pat@Example.COM "), "pat@example.com");
    }
}
