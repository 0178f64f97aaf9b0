#![forbid(unsafe_code)]

//! Form schemas: the declared fields of each form, in display order.

use crate::validators::{Email, Required, ValidationResult, Validator};

/// Format constraint applied to a field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldFormat {
    /// Any text.
    #[default]
    Freeform,
    /// Must look like an email address (see [`Email`]).
    EmailAddress,
}

/// A single field declaration.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    label: String,
    required: bool,
    format: FieldFormat,
    default: String,
}

impl FieldSpec {
    /// Create a freeform text field.
    pub fn text(name: impl Into<String>) -> Self {
        let name = name.into();
        let label = Self::title_case(&name);
        Self {
            name,
            label,
            required: false,
            format: FieldFormat::Freeform,
            default: String::new(),
        }
    }

    /// Create an email field (format-checked when non-empty).
    pub fn email(name: impl Into<String>) -> Self {
        Self {
            format: FieldFormat::EmailAddress,
            ..Self::text(name)
        }
    }

    /// Mark the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Override the display label (defaults to the title-cased name).
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set a default value used at creation and after reset.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    /// Field identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the field must be non-empty at submit time.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Format constraint.
    #[must_use]
    pub fn format(&self) -> FieldFormat {
        self.format
    }

    /// Default value.
    #[must_use]
    pub fn default_value(&self) -> &str {
        &self.default
    }

    /// Check a candidate value against this field's constraints.
    ///
    /// An optional field left empty is valid regardless of format; format
    /// constraints apply only to non-empty values.
    pub fn check(&self, value: &str) -> ValidationResult {
        if value.trim().is_empty() {
            return if self.required {
                Required.validate(value)
            } else {
                ValidationResult::Valid
            };
        }
        match self.format {
            FieldFormat::Freeform => ValidationResult::Valid,
            FieldFormat::EmailAddress => Email.validate(value),
        }
    }

    fn title_case(name: &str) -> String {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// An ordered set of field declarations.
///
/// Iteration order is declaration order everywhere downstream: the
/// controller's value storage, validation reports, and submission records
/// all follow it.
#[derive(Debug, Clone)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Create a schema from fields, in display order.
    #[must_use]
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        debug_assert!(
            {
                let mut names: Vec<&str> = fields.iter().map(FieldSpec::name).collect();
                names.sort_unstable();
                names.windows(2).all(|w| w[0] != w[1])
            },
            "duplicate field name in schema"
        );
        Self { fields }
    }

    /// The site's contact form: name, email, optional subject, message.
    #[must_use]
    pub fn contact() -> Self {
        Self::new(vec![
            FieldSpec::text("name").required(),
            FieldSpec::email("email").required(),
            FieldSpec::text("subject"),
            FieldSpec::text("message").required(),
        ])
    }

    /// The footer newsletter signup: a single email field.
    #[must_use]
    pub fn newsletter() -> Self {
        Self::new(vec![FieldSpec::email("email").required()])
    }

    /// The auth modal: email and password.
    ///
    /// Password strength gating for sign-up is advisory UI handled via
    /// [`crate::password_strength`], not a schema constraint.
    #[must_use]
    pub fn auth() -> Self {
        Self::new(vec![
            FieldSpec::email("email").required(),
            FieldSpec::text("password").required(),
        ])
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Index of a field by name.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == name)
    }

    /// Field spec by index.
    #[must_use]
    pub fn field(&self, index: usize) -> &FieldSpec {
        &self.fields[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_declares_fields_in_display_order() {
        let schema = FormSchema::contact();
        let names: Vec<&str> = schema.fields().map(FieldSpec::name).collect();
        assert_eq!(names, ["name", "email", "subject", "message"]);
        assert!(schema.field(0).is_required());
        assert!(!schema.field(2).is_required());
    }

    #[test]
    fn optional_field_empty_is_valid() {
        let subject = FieldSpec::text("subject");
        assert!(subject.check("").is_valid());
        assert!(subject.check("Partnership").is_valid());
    }

    #[test]
    fn optional_email_still_format_checked_when_filled() {
        let cc = FieldSpec::email("cc");
        assert!(cc.check("").is_valid());
        assert!(!cc.check("nope").is_valid());
        assert!(cc.check("a@b.com").is_valid());
    }

    #[test]
    fn labels_default_to_title_case() {
        assert_eq!(FieldSpec::text("message").label(), "Message");
        assert_eq!(
            FieldSpec::text("message").with_label("Your message").label(),
            "Your message"
        );
    }
}
