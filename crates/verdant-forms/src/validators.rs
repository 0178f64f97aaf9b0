#![forbid(unsafe_code)]

//! Composable field validators.
//!
//! Each validator is a small value implementing [`Validator`]; rules combine
//! with [`And`]. Error codes are stable identifiers for message lookup; the
//! message carried alongside is the default English copy shown by the site.

use std::fmt;

/// Error code for required-field validation.
pub const ERROR_CODE_REQUIRED: &str = "required";
/// Error code for email-format validation.
pub const ERROR_CODE_EMAIL: &str = "email";
/// Error code for minimum-length validation.
pub const ERROR_CODE_MIN_LENGTH: &str = "too_short";
/// Error code for maximum-length validation.
pub const ERROR_CODE_MAX_LENGTH: &str = "too_long";

/// A validation failure with a stable code and display copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable identifier for programmatic handling.
    pub code: &'static str,
    /// Human-readable default message.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    #[must_use]
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Outcome of validating a single value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationResult {
    /// The value is valid.
    #[default]
    Valid,
    /// The value is invalid.
    Invalid(ValidationError),
}

impl ValidationResult {
    /// Returns `true` if the result is `Valid`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The error, if invalid.
    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(err) => Some(err),
        }
    }
}

/// A rule that accepts or rejects a string value.
pub trait Validator {
    /// Validate `value`.
    fn validate(&self, value: &str) -> ValidationResult;
}

// ---------------------------------------------------------------------------
// Built-in validators
// ---------------------------------------------------------------------------

/// Rejects empty (or whitespace-only) values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Validator for Required {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.trim().is_empty() {
            ValidationResult::Invalid(ValidationError::new(
                ERROR_CODE_REQUIRED,
                "This field is required",
            ))
        } else {
            ValidationResult::Valid
        }
    }
}

/// Loose email shape check: non-empty local part, one `@`, non-empty domain,
/// no whitespace.
///
/// Deliberately permissive; anything stricter belongs to the submission
/// endpoint, which sees the address anyway.
#[derive(Debug, Clone, Copy, Default)]
pub struct Email;

impl Email {
    fn looks_valid(value: &str) -> bool {
        if value.chars().any(char::is_whitespace) {
            return false;
        }
        match value.split_once('@') {
            Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
            None => false,
        }
    }
}

impl Validator for Email {
    fn validate(&self, value: &str) -> ValidationResult {
        if Self::looks_valid(value) {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(ValidationError::new(
                ERROR_CODE_EMAIL,
                "Please enter a valid email address",
            ))
        }
    }
}

/// Rejects values shorter than `min` characters.
#[derive(Debug, Clone, Copy)]
pub struct MinLength {
    /// Minimum length in characters (inclusive).
    pub min: usize,
}

impl MinLength {
    /// Create a minimum-length validator.
    #[must_use]
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl Validator for MinLength {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.chars().count() < self.min {
            ValidationResult::Invalid(ValidationError::new(
                ERROR_CODE_MIN_LENGTH,
                format!("Must be at least {} characters", self.min),
            ))
        } else {
            ValidationResult::Valid
        }
    }
}

/// Rejects values longer than `max` characters.
#[derive(Debug, Clone, Copy)]
pub struct MaxLength {
    /// Maximum length in characters (inclusive).
    pub max: usize,
}

impl MaxLength {
    /// Create a maximum-length validator.
    #[must_use]
    pub fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Validator for MaxLength {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.chars().count() > self.max {
            ValidationResult::Invalid(ValidationError::new(
                ERROR_CODE_MAX_LENGTH,
                format!("Must be at most {} characters", self.max),
            ))
        } else {
            ValidationResult::Valid
        }
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Both validators must pass; the first failure wins.
#[derive(Debug, Clone, Copy)]
pub struct And<A, B> {
    /// First validator.
    pub first: A,
    /// Second validator.
    pub second: B,
}

impl<A, B> And<A, B> {
    /// Create a new `And` validator.
    #[must_use]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Validator, B: Validator> Validator for And<A, B> {
    fn validate(&self, value: &str) -> ValidationResult {
        match self.first.validate(value) {
            ValidationResult::Valid => self.second.validate(value),
            err => err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_empty_and_whitespace() {
        assert!(!Required.validate("").is_valid());
        assert!(!Required.validate("   ").is_valid());
        assert!(Required.validate("hello").is_valid());
        assert_eq!(
            Required.validate("").error().map(|e| e.code),
            Some(ERROR_CODE_REQUIRED)
        );
    }

    #[test]
    fn email_accepts_loose_shape() {
        assert!(Email.validate("a@b.com").is_valid());
        assert!(Email.validate("a@b").is_valid()); // permissive on purpose
        assert!(!Email.validate("not-an-email").is_valid());
        assert!(!Email.validate("@missing-local").is_valid());
        assert!(!Email.validate("missing-domain@").is_valid());
        assert!(!Email.validate("has space@example.com").is_valid());
        assert!(!Email.validate("").is_valid());
    }

    #[test]
    fn length_bounds_count_chars_not_bytes() {
        assert!(MinLength::new(3).validate("héé").is_valid());
        assert!(!MinLength::new(4).validate("héé").is_valid());
        assert!(MaxLength::new(3).validate("héé").is_valid());
        assert!(!MaxLength::new(2).validate("héé").is_valid());
    }

    #[test]
    fn and_reports_first_failure() {
        let v = And::new(Required, Email);
        assert_eq!(v.validate("").error().map(|e| e.code), Some(ERROR_CODE_REQUIRED));
        assert_eq!(v.validate("nope").error().map(|e| e.code), Some(ERROR_CODE_EMAIL));
        assert!(v.validate("a@b.com").is_valid());
    }
}
