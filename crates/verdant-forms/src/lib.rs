#![forbid(unsafe_code)]

//! Form submission lifecycle for the Verdant landing experience.
//!
//! The view layer owns markup and styling; this crate owns behavior:
//!
//! - [`FormSchema`] declares a form's fields, their defaults, and their
//!   constraints ([`schema`]).
//! - [`Validator`] and the built-in validators express per-field rules as
//!   composable values ([`validators`]).
//! - [`FormController`] runs the submit state machine: field edits, touched
//!   tracking, validation gating, and split-phase dispatch to a
//!   [`SubmissionBackend`] ([`controller`]).
//! - [`password_strength`] scores auth-modal passwords ([`password`]).
//!
//! # Example
//!
//! ```
//! use verdant_forms::{FormController, FormSchema, SubmitAction};
//!
//! let mut form = FormController::new(FormSchema::newsletter());
//! form.set_field("email", "not-an-email");
//! assert_eq!(form.validate(), vec!["email".to_string()]);
//!
//! // Invalid input never reaches the backend.
//! assert!(matches!(form.submit(), SubmitAction::Rejected(_)));
//! ```

pub mod controller;
pub mod password;
pub mod schema;
pub mod validators;

pub use controller::{
    FailureReason, FormController, SubmissionBackend, SubmissionError, SubmissionRecord,
    SubmissionToken, SubmitAction, SubmitStatus,
};
pub use password::{PasswordStrength, password_strength};
pub use schema::{FieldFormat, FieldSpec, FormSchema};
pub use validators::{
    And, Email, MaxLength, MinLength, Required, ValidationError, ValidationResult, Validator,
};
