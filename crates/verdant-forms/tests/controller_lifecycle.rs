#![forbid(unsafe_code)]

//! End-to-end lifecycle tests for `FormController` against counting backends.

use verdant_forms::{
    FailureReason, FormController, FormSchema, SubmissionBackend, SubmissionError,
    SubmissionRecord, SubmitAction, SubmitStatus,
};

/// Backend that counts invocations and returns a scripted outcome.
#[derive(Default)]
struct CountingBackend {
    calls: usize,
    reject_with: Option<String>,
}

impl CountingBackend {
    fn rejecting(reason: &str) -> Self {
        Self {
            calls: 0,
            reject_with: Some(reason.to_string()),
        }
    }
}

impl SubmissionBackend for CountingBackend {
    fn submit(&mut self, _record: &SubmissionRecord) -> Result<(), SubmissionError> {
        self.calls += 1;
        match &self.reject_with {
            Some(reason) => Err(SubmissionError::new(reason.clone())),
            None => Ok(()),
        }
    }
}

fn filled_contact() -> FormController {
    let mut form = FormController::new(FormSchema::contact());
    form.set_field("name", "Ada");
    form.set_field("email", "ada@example.com");
    form.set_field("message", "Tell me about the reef program.");
    form
}

#[test]
fn valid_submit_invokes_backend_exactly_once() {
    let mut form = filled_contact();
    let mut backend = CountingBackend::default();
    form.submit_with(&mut backend);
    assert_eq!(backend.calls, 1);
    assert!(form.status().is_succeeded());
}

#[test]
fn missing_required_name_fails_locally() {
    let mut form = FormController::new(FormSchema::contact());
    form.set_field("email", "a@b.com");
    form.set_field("message", "hello");

    assert_eq!(form.validate(), vec!["name".to_string()]);

    let mut backend = CountingBackend::default();
    form.submit_with(&mut backend);
    assert_eq!(backend.calls, 0, "backend must not see invalid forms");
    assert!(matches!(
        form.status(),
        SubmitStatus::Failed(FailureReason::Validation(fields)) if fields == &["name"]
    ));
}

#[test]
fn malformed_newsletter_email_never_reaches_backend() {
    let mut form = FormController::new(FormSchema::newsletter());
    form.set_field("email", "not-an-email");

    assert_eq!(form.validate(), vec!["email".to_string()]);

    let mut backend = CountingBackend::default();
    form.submit_with(&mut backend);
    assert_eq!(backend.calls, 0);
}

#[test]
fn reentrant_submit_while_in_flight_is_a_noop() {
    let mut form = filled_contact();

    let SubmitAction::Dispatch { token, record } = form.submit() else {
        panic!("expected dispatch");
    };
    assert!(form.submit_disabled());

    // A second submit before resolution must not issue another dispatch.
    assert_eq!(form.submit(), SubmitAction::InFlight);
    assert_eq!(form.submit(), SubmitAction::InFlight);

    let mut backend = CountingBackend::default();
    let result = backend.submit(&record);
    assert!(form.resolve(token, result));
    assert_eq!(backend.calls, 1);
    assert!(form.status().is_succeeded());
}

#[test]
fn failure_leaves_fields_editable_for_resubmit() {
    let mut form = filled_contact();
    let mut backend = CountingBackend::rejecting("Service unavailable");
    form.submit_with(&mut backend);
    assert!(matches!(
        form.status(),
        SubmitStatus::Failed(FailureReason::Submission(msg)) if msg == "Service unavailable"
    ));
    // Fields survive a failed submit so the user can retry.
    assert_eq!(form.value("name"), Some("Ada"));

    let mut ok = CountingBackend::default();
    form.submit_with(&mut ok);
    assert_eq!(ok.calls, 1);
    assert!(form.status().is_succeeded());
}

#[test]
fn reset_returns_to_idle_from_every_state() {
    // From Failed.
    let mut form = FormController::new(FormSchema::contact());
    form.submit();
    assert!(form.status().is_failed());
    form.reset();
    assert_eq!(form.status(), &SubmitStatus::Idle);
    assert!(form.fields().all(|(_, v)| v.is_empty()));

    // From Submitting (in-flight result is later discarded).
    let mut form = filled_contact();
    let SubmitAction::Dispatch { token, .. } = form.submit() else {
        panic!("expected dispatch");
    };
    form.reset();
    assert_eq!(form.status(), &SubmitStatus::Idle);
    assert!(!form.resolve(token, Ok(())));
    assert_eq!(form.status(), &SubmitStatus::Idle);

    // From Succeeded.
    let mut form = filled_contact();
    form.submit_with(&mut CountingBackend::default());
    form.reset();
    assert_eq!(form.status(), &SubmitStatus::Idle);
}

#[test]
fn succeeded_submit_clears_to_defaults() {
    let mut form = filled_contact();
    form.submit_with(&mut CountingBackend::default());
    assert!(form.fields().all(|(_, v)| v.is_empty()));
    assert!(!form.is_touched("name"));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn field_value() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            "[ ]{1,3}",
            "[a-zA-Z0-9 ]{1,20}",
            "[a-z]{1,8}@[a-z]{1,8}\\.[a-z]{2,3}",
        ]
    }

    proptest! {
        /// validate() returns exactly the violating field names: re-checking
        /// each reported field individually fails, and every unreported
        /// field passes.
        #[test]
        fn validate_reports_exactly_the_violations(
            name in field_value(),
            email in field_value(),
            subject in field_value(),
            message in field_value(),
        ) {
            let mut form = FormController::new(FormSchema::contact());
            form.set_field("name", name);
            form.set_field("email", email);
            form.set_field("subject", subject);
            form.set_field("message", message);

            let failing = form.validate();
            for spec_name in ["name", "email", "subject", "message"] {
                let index = form.schema().index_of(spec_name).unwrap();
                let spec = form.schema().field(index);
                let value = form.value(spec_name).unwrap();
                prop_assert_eq!(
                    failing.iter().any(|f| f == spec_name),
                    !spec.check(value).is_valid()
                );
            }
        }

        /// Whatever the inputs, a submit either dispatches exactly once or
        /// fails validation; after resolution the controller is terminal and
        /// resubmittable.
        #[test]
        fn submit_dispatches_at_most_once(
            email in field_value(),
            accept: bool,
        ) {
            let mut form = FormController::new(FormSchema::newsletter());
            form.set_field("email", email);

            // Snapshot validity before submitting: success clears the fields.
            let was_valid = form.validate().is_empty();

            let mut backend = if accept {
                CountingBackend::default()
            } else {
                CountingBackend::rejecting("no")
            };
            form.submit_with(&mut backend);

            if was_valid {
                prop_assert_eq!(backend.calls, 1);
                prop_assert!(form.status().is_succeeded() || form.status().is_failed());
            } else {
                prop_assert_eq!(backend.calls, 0);
                prop_assert!(form.status().is_failed());
            }
        }
    }
}
