#![forbid(unsafe_code)]

//! The form submission state machine.
//!
//! `FormController` mediates between raw user input and the submission
//! endpoint, exposing a small observable state machine to the view:
//!
//! ```text
//! Idle -> Submitting -> (Succeeded | Failed) -> Idle (reset / resubmit)
//! ```
//!
//! Submission is split-phase so a browser-style await fits a synchronous
//! event loop: [`FormController::submit`] validates and hands back a
//! [`SubmitAction::Dispatch`] carrying a monotonic [`SubmissionToken`]; the
//! driver forwards the record to the backend and later calls
//! [`FormController::resolve`] with that token. A resolve whose token does
//! not match the current in-flight token is discarded, so late results
//! arriving after a reset can never clobber newer state. At most one token
//! is outstanding per controller: re-entrant `submit` while `Submitting` is
//! a no-op and the backend is not invoked a second time.
//!
//! There is no retry, no backoff, no queueing, and no cancellation; an
//! in-flight submission runs to completion and the view ignores stale
//! results via the token check.

use std::fmt;

use tracing::{debug, warn};

use crate::schema::{FieldSpec, FormSchema};

/// Fallback copy for a backend rejection with no usable reason.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to submit form. Please try again.";

// ---------------------------------------------------------------------------
// SubmissionToken
// ---------------------------------------------------------------------------

/// Monotonic identifier for one dispatched submission.
///
/// Token 0 is reserved for "nothing in flight"; tokens never wrap (u64
/// headroom outlives any session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionToken(u64);

impl SubmissionToken {
    /// The null token: no submission in flight.
    pub const NONE: Self = Self(0);

    /// Raw token value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Whether this is the null token.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for SubmissionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({})", self.0)
    }
}

// ---------------------------------------------------------------------------
// SubmissionRecord + backend boundary
// ---------------------------------------------------------------------------

/// The structured payload handed to the submission endpoint: field names
/// mapped to values, in schema declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    entries: Vec<(String, String)>,
}

impl SubmissionRecord {
    /// Pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Value for a field, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record carries no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SubmissionRecord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Why the submission endpoint rejected a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionError {
    reason: Option<String>,
}

impl SubmissionError {
    /// A rejection with a human-readable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            reason: if reason.trim().is_empty() {
                None
            } else {
                Some(reason)
            },
        }
    }

    /// A rejection with no usable reason; displays the generic fallback.
    #[must_use]
    pub fn unspecified() -> Self {
        Self { reason: None }
    }

    /// The message shown to the user.
    #[must_use]
    pub fn message(&self) -> &str {
        self.reason.as_deref().unwrap_or(GENERIC_FAILURE_MESSAGE)
    }
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for SubmissionError {}

/// The submission endpoint boundary.
///
/// The concrete transport (hosted database, HTTP, queue) is out of scope;
/// the controller only needs success-or-reason.
pub trait SubmissionBackend {
    /// Submit a record. `Ok(())` means accepted.
    fn submit(&mut self, record: &SubmissionRecord) -> Result<(), SubmissionError>;
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Why a submit attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Local validation rejected the fields; names in declaration order.
    /// The backend was not contacted.
    Validation(Vec<String>),
    /// The backend rejected the record with this user-visible message.
    Submission(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(_) => f.write_str("validation"),
            Self::Submission(message) => f.write_str(message),
        }
    }
}

/// Observable lifecycle state of the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    /// No submission attempted or outstanding.
    #[default]
    Idle,
    /// A submission is in flight; the submit control must be disabled.
    Submitting,
    /// The last submission was accepted.
    Succeeded,
    /// The last attempt failed.
    Failed(FailureReason),
}

impl SubmitStatus {
    /// Whether a submission is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Whether the last submission succeeded.
    #[must_use]
    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Whether the last attempt failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Result of calling [`FormController::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    /// A submission was already in flight; nothing changed.
    InFlight,
    /// Validation failed; the named fields are invalid and the backend was
    /// not contacted.
    Rejected(Vec<String>),
    /// Dispatch `record` to the backend, then call
    /// [`FormController::resolve`] with `token`.
    Dispatch {
        /// Token identifying this dispatch.
        token: SubmissionToken,
        /// Snapshot of the field values at submit time.
        record: SubmissionRecord,
    },
}

// ---------------------------------------------------------------------------
// FormController
// ---------------------------------------------------------------------------

/// State machine driving one form instance.
///
/// Created when the form view mounts, discarded on unmount; nothing here
/// persists across reloads.
#[derive(Debug)]
pub struct FormController {
    schema: FormSchema,
    values: Vec<String>,
    touched: Vec<bool>,
    status: SubmitStatus,
    next_token: u64,
    in_flight: SubmissionToken,
}

impl FormController {
    /// Create a controller with every field at its default value.
    #[must_use]
    pub fn new(schema: FormSchema) -> Self {
        let values = schema
            .fields()
            .map(|f| f.default_value().to_string())
            .collect();
        let touched = vec![false; schema.len()];
        Self {
            schema,
            values,
            touched,
            status: SubmitStatus::Idle,
            next_token: 1,
            in_flight: SubmissionToken::NONE,
        }
    }

    /// The schema this controller was built from.
    #[must_use]
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Current lifecycle status.
    #[must_use]
    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Whether the submit control should be disabled.
    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        self.status.is_submitting()
    }

    /// Current value of a field. `None` for unknown names.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.schema
            .index_of(name)
            .map(|i| self.values[i].as_str())
    }

    /// Whether a field has received user interaction.
    #[must_use]
    pub fn is_touched(&self, name: &str) -> bool {
        self.schema
            .index_of(name)
            .is_some_and(|i| self.touched[i])
    }

    /// `(name, value)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.schema
            .fields()
            .map(FieldSpec::name)
            .zip(self.values.iter().map(String::as_str))
    }

    /// Update a field's value and mark it touched.
    ///
    /// An unknown field name is a programming error: asserted in debug
    /// builds, ignored in release builds.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        let Some(index) = self.schema.index_of(name) else {
            debug_assert!(false, "set_field on unknown field {name:?}");
            return;
        };
        self.values[index] = value.into();
        self.touched[index] = true;
    }

    /// Mark a field touched without changing its value (blur handler).
    pub fn touch(&mut self, name: &str) {
        let Some(index) = self.schema.index_of(name) else {
            debug_assert!(false, "touch on unknown field {name:?}");
            return;
        };
        self.touched[index] = true;
    }

    /// Validate all fields against the schema.
    ///
    /// Pure with respect to controller state; returns the failing field
    /// names in declaration order, empty when everything passes.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        self.schema
            .fields()
            .zip(&self.values)
            .filter(|(spec, value)| !spec.check(value).is_valid())
            .map(|(spec, _)| spec.name().to_string())
            .collect()
    }

    /// Attempt a submission.
    ///
    /// No-op while a submission is already in flight. Validation failures
    /// transition to `Failed` without producing a dispatch. Otherwise the
    /// controller enters `Submitting` and the returned
    /// [`SubmitAction::Dispatch`] must be forwarded to the backend, with the
    /// outcome reported via [`FormController::resolve`].
    pub fn submit(&mut self) -> SubmitAction {
        if self.status.is_submitting() {
            debug!(token = self.in_flight.raw(), "submit ignored: already in flight");
            return SubmitAction::InFlight;
        }

        let failing = self.validate();
        if !failing.is_empty() {
            debug!(fields = ?failing, "submit rejected by validation");
            self.status = SubmitStatus::Failed(FailureReason::Validation(failing.clone()));
            return SubmitAction::Rejected(failing);
        }

        let token = SubmissionToken(self.next_token);
        self.next_token += 1;
        self.in_flight = token;
        self.status = SubmitStatus::Submitting;
        debug!(%token, "submission dispatched");

        SubmitAction::Dispatch {
            token,
            record: SubmissionRecord {
                entries: self
                    .fields()
                    .map(|(n, v)| (n.to_string(), v.to_string()))
                    .collect(),
            },
        }
    }

    /// Report the backend's outcome for a dispatched submission.
    ///
    /// Returns `true` if the result was applied. Results for any token other
    /// than the current in-flight one are stale (a reset intervened) and are
    /// discarded.
    pub fn resolve(&mut self, token: SubmissionToken, result: Result<(), SubmissionError>) -> bool {
        if !self.status.is_submitting() || token != self.in_flight || token.is_none() {
            warn!(%token, current = %self.in_flight, "discarding stale submission result");
            return false;
        }
        self.in_flight = SubmissionToken::NONE;
        match result {
            Ok(()) => {
                debug!(%token, "submission succeeded");
                self.clear_fields();
                self.status = SubmitStatus::Succeeded;
            }
            Err(err) => {
                debug!(%token, reason = err.message(), "submission failed");
                self.status = SubmitStatus::Failed(FailureReason::Submission(
                    err.message().to_string(),
                ));
            }
        }
        true
    }

    /// Run both submission phases against a synchronous backend.
    pub fn submit_with(&mut self, backend: &mut dyn SubmissionBackend) -> &SubmitStatus {
        if let SubmitAction::Dispatch { token, record } = self.submit() {
            let result = backend.submit(&record);
            self.resolve(token, result);
        }
        &self.status
    }

    /// Return to `Idle` with default fields and cleared touched state.
    ///
    /// Callable from any state; a submission still in flight will be
    /// discarded on arrival by the token check in [`FormController::resolve`].
    pub fn reset(&mut self) {
        self.clear_fields();
        self.in_flight = SubmissionToken::NONE;
        self.status = SubmitStatus::Idle;
    }

    fn clear_fields(&mut self) {
        for (value, spec) in self.values.iter_mut().zip(self.schema.fields()) {
            value.clear();
            value.push_str(spec.default_value());
        }
        self.touched.fill(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FormSchema;

    struct AlwaysOk;

    impl SubmissionBackend for AlwaysOk {
        fn submit(&mut self, _record: &SubmissionRecord) -> Result<(), SubmissionError> {
            Ok(())
        }
    }

    #[test]
    fn set_field_marks_touched() {
        let mut form = FormController::new(FormSchema::contact());
        assert!(!form.is_touched("name"));
        form.set_field("name", "Ada");
        assert!(form.is_touched("name"));
        assert_eq!(form.value("name"), Some("Ada"));
    }

    #[test]
    fn touch_without_edit() {
        let mut form = FormController::new(FormSchema::contact());
        form.touch("email");
        assert!(form.is_touched("email"));
        assert_eq!(form.value("email"), Some(""));
    }

    #[test]
    fn unknown_field_is_ignored_in_release() {
        let mut form = FormController::new(FormSchema::newsletter());
        // Would debug_assert in debug builds; documents release behavior.
        if cfg!(not(debug_assertions)) {
            form.set_field("nope", "x");
            assert_eq!(form.value("nope"), None);
        }
    }

    #[test]
    fn record_preserves_declaration_order() {
        let mut form = FormController::new(FormSchema::contact());
        form.set_field("message", "hi there");
        form.set_field("name", "Ada");
        form.set_field("email", "ada@example.com");
        let SubmitAction::Dispatch { record, .. } = form.submit() else {
            panic!("expected dispatch");
        };
        let names: Vec<&str> = record.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["name", "email", "subject", "message"]);
        assert_eq!(record.get("subject"), Some(""));
    }

    #[test]
    fn succeeded_clears_fields() {
        let mut form = FormController::new(FormSchema::newsletter());
        form.set_field("email", "ada@example.com");
        form.submit_with(&mut AlwaysOk);
        assert!(form.status().is_succeeded());
        assert_eq!(form.value("email"), Some(""));
        assert!(!form.is_touched("email"));
    }

    #[test]
    fn backend_reason_is_surfaced_verbatim() {
        struct Reject;
        impl SubmissionBackend for Reject {
            fn submit(&mut self, _: &SubmissionRecord) -> Result<(), SubmissionError> {
                Err(SubmissionError::new("Mailbox is full"))
            }
        }
        let mut form = FormController::new(FormSchema::newsletter());
        form.set_field("email", "ada@example.com");
        form.submit_with(&mut Reject);
        assert_eq!(
            form.status(),
            &SubmitStatus::Failed(FailureReason::Submission("Mailbox is full".into()))
        );
    }

    #[test]
    fn missing_reason_falls_back_to_generic_copy() {
        assert_eq!(SubmissionError::unspecified().message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(SubmissionError::new("   ").message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn failure_reason_displays_as_validation() {
        let reason = FailureReason::Validation(vec!["name".into()]);
        assert_eq!(reason.to_string(), "validation");
    }

    #[test]
    fn stale_token_after_reset_is_discarded() {
        let mut form = FormController::new(FormSchema::newsletter());
        form.set_field("email", "ada@example.com");
        let SubmitAction::Dispatch { token, .. } = form.submit() else {
            panic!("expected dispatch");
        };
        form.reset();
        assert!(!form.resolve(token, Ok(())));
        assert_eq!(form.status(), &SubmitStatus::Idle);
    }

    #[test]
    fn resolve_with_null_token_is_discarded() {
        let mut form = FormController::new(FormSchema::newsletter());
        assert!(!form.resolve(SubmissionToken::NONE, Ok(())));
    }
}
