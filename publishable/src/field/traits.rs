//! The capability traits fields and their collaborators implement.
//!
//! This module defines:
//!
//! - [`InputField`]: the capability every form field satisfies — render,
//!   get/set value, validate, save into a record, title, class and attribute
//!   handling — with default methods for the optional capabilities
//! - [`Validator`]: the external collector validation failures report into
//!
//! Composition happens through these traits rather than inheritance: the
//! composite in [`crate::visibility`] implements [`InputField`] by delegating
//! most operations to its wrapped child.

use serde_json::Value;

use super::readonly::ReadonlyField;
use crate::{
    form::FormContext,
    record::{RecordError, VisibilityRecord},
};

// =============================================================================
// Validator - External validation collector
// =============================================================================

/// Collects validation failures reported by fields.
///
/// Validation rules themselves live with the concrete field types; this crate
/// only routes `validate` calls through to the wrapped child and never
/// reports a failure of its own.
pub trait Validator {
    /// Records a validation failure for the field named `field`.
    fn report(&mut self, field: &str, message: &str);
}

// =============================================================================
// InputField - The form-field capability
// =============================================================================

/// The capability every form field satisfies.
///
/// The trait is object safe so fields can be owned and wrapped as
/// `Box<dyn InputField>`. Optional capabilities come with defaults:
///
/// - [`requires_multipart`] is the explicit capability query for fields that
///   transmit binary content; wrapping such a field escalates the owning
///   form's encoding. The default is `false`.
/// - [`selected_label`] lets fields backed by an enumerable source (e.g. a
///   dropdown) resolve their current value to its display label for read-only
///   presentation. The default is `None`.
/// - [`data_value`] is the normalized value persisted into records and
///   defaults to the raw [`value`].
///
/// [`requires_multipart`]: InputField::requires_multipart
/// [`selected_label`]: InputField::selected_label
/// [`data_value`]: InputField::data_value
/// [`value`]: InputField::value
pub trait InputField {
    /// The field's name, which doubles as its submission key.
    fn name(&self) -> &str;

    /// Renames the field.
    fn set_name(&mut self, name: &str);

    /// The human-readable title shown alongside the field.
    fn title(&self) -> String;

    /// Assigns the field's value.
    fn set_value(&mut self, value: Value);

    /// The field's current raw value.
    fn value(&self) -> Value;

    /// The field's normalized value, as persisted into records.
    fn data_value(&self) -> Value {
        self.value()
    }

    /// Renders the field as markup.
    fn field(&self) -> String;

    /// Validates the field's current value, reporting failures into
    /// `validator`. Returns whether the value passed.
    fn validate(&self, validator: &mut dyn Validator) -> bool {
        let _ = validator;
        true
    }

    /// Persists the field's value into `record` using the field's own
    /// semantics. Storage failures propagate to the caller.
    fn save_into(&self, record: &mut dyn VisibilityRecord) -> Result<(), RecordError> {
        record.write_field(self.name(), self.data_value())
    }

    /// Associates the field with its owning form.
    fn set_form(&mut self, form: &mut FormContext) {
        let _ = form;
    }

    /// Adds a CSS class to the field's container.
    fn add_extra_class(&mut self, class: &str);

    /// Removes a CSS class from the field's container. Removing an absent
    /// class is a no-op.
    fn remove_extra_class(&mut self, class: &str);

    /// Sets an arbitrary rendering attribute on the field.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Whether the field transmits binary content and therefore requires the
    /// owning form to submit as multipart.
    fn requires_multipart(&self) -> bool {
        false
    }

    /// For fields backed by an enumerable source, the display label of the
    /// currently selected value.
    fn selected_label(&self) -> Option<String> {
        None
    }

    /// Produces a non-interactive display variant of the field.
    fn readonly_field(&self) -> ReadonlyField {
        ReadonlyField::new(self.name(), self.title(), self.value())
    }

    /// Produces an independent copy of the field.
    ///
    /// Persistence operates on such a copy so no save call mutates field
    /// state visible to a later save.
    fn clone_boxed(&self) -> Box<dyn InputField>;
}

impl Clone for Box<dyn InputField> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}
