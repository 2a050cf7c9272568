//! The composite field pairing a wrapped input with a visibility toggle.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::{debug, trace};

use crate::{
    data::{SubmittedData, VISIBLE_KEY},
    field::{CheckboxField, InputField, ReadonlyField, Validator},
    form::{FormContext, FormEncoding},
    record::{RecordError, VisibilityRecord},
};

/// Derives the toggle name for a field: `Visible[<name>]`.
fn toggle_name(name: &str) -> String {
    format!("{VISIBLE_KEY}[{name}]")
}

// =============================================================================
// CheckableVisibilityField - The composite
// =============================================================================

/// A wrapper around a field adding a checkbox that marks the field's value as
/// publicly visible on the owning record.
///
/// The composite's name is derived from, and always equal to, the wrapped
/// child's name; the owned toggle is named `Visible[<name>]`. On submission
/// the value is forwarded into the child unconditionally while the toggle
/// state is re-derived from the accompanying [`SubmittedData`]. On save the
/// child persists its own value through an independent copy, then the
/// record's public-field set gains or loses the field's name according to the
/// toggle.
///
/// ```
/// use publishable::{CheckableVisibilityField, CheckboxField, InputField};
///
/// let child = CheckboxField::new("Newsletter", "Subscribed");
/// let composite = CheckableVisibilityField::new(Box::new(child));
/// assert_eq!(composite.name(), "Newsletter");
/// assert_eq!(composite.checkbox().name(), "Visible[Newsletter]");
/// ```
#[derive(Clone)]
pub struct CheckableVisibilityField {
    name: String,
    child: Box<dyn InputField>,
    checkbox: CheckboxField,
    always_visible: bool,
    extra_classes: BTreeSet<String>,
    form: Option<String>,
}

impl CheckableVisibilityField {
    /// Wraps `child`, taking over its name and creating the unchecked
    /// visibility toggle with an empty label.
    #[must_use]
    pub fn new(child: Box<dyn InputField>) -> Self {
        let name = child.name().to_owned();
        let checkbox = CheckboxField::new(toggle_name(&name), "");
        Self {
            name,
            child,
            checkbox,
            always_visible: false,
            extra_classes: BTreeSet::new(),
            form: None,
        }
    }

    /// The wrapped child field.
    #[must_use]
    pub fn child(&self) -> &dyn InputField {
        self.child.as_ref()
    }

    /// The owned visibility toggle.
    #[must_use]
    pub const fn checkbox(&self) -> &CheckboxField {
        &self.checkbox
    }

    /// Whether the field has been made permanently visible.
    #[must_use]
    pub const fn is_always_visible(&self) -> bool {
        self.always_visible
    }

    /// Makes the field permanently visible.
    ///
    /// One-way transition: the toggle is forced checked and replaced by its
    /// non-interactive representation, and no later value assignment can
    /// uncheck it. Re-invocation is a no-op beyond the redundant replacement.
    pub fn make_always_visible(&mut self) {
        self.always_visible = true;
        self.checkbox.set_checked(true);
        self.checkbox.make_disabled();
    }

    /// Assigns `value` into the child and re-derives the toggle state from
    /// `data`.
    ///
    /// The value is forwarded unconditionally. The toggle resolves by
    /// priority: an always-visible field stays checked; request data checks
    /// the toggle iff `data["Visible"][<name>]` is present and truthy; a
    /// source record checks it iff the name is in the record's public-field
    /// set. Missing keys degrade to unchecked, never to an error.
    pub fn set_submitted_value(&mut self, value: Value, data: &SubmittedData<'_>) -> &mut Self {
        self.child.set_value(value);

        let visible = self.always_visible || data.visible_flag(&self.name);
        trace!(field = %self.name, visible, "resolved visibility toggle");
        self.checkbox.set_checked(visible);

        self
    }

    /// The composite's own extra classes.
    #[must_use]
    pub const fn extra_classes(&self) -> &BTreeSet<String> {
        &self.extra_classes
    }

    /// The name of the form this composite is associated with, if any.
    #[must_use]
    pub fn form_name(&self) -> Option<&str> {
        self.form.as_deref()
    }
}

impl InputField for CheckableVisibilityField {
    fn name(&self) -> &str {
        &self.name
    }

    /// Renames the composite, keeping the toggle at `Visible[<name>]`.
    /// The child keeps its own name; any drift is corrected at save time.
    fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
        self.checkbox.set_name(&toggle_name(name));
    }

    fn title(&self) -> String {
        self.child.title()
    }

    fn set_value(&mut self, value: Value) {
        self.set_submitted_value(value, &SubmittedData::empty());
    }

    fn value(&self) -> Value {
        self.child.value()
    }

    fn data_value(&self) -> Value {
        self.child.data_value()
    }

    fn field(&self) -> String {
        format!("{} {}", self.child.field(), self.checkbox.field())
    }

    fn validate(&self, validator: &mut dyn Validator) -> bool {
        self.child.validate(validator)
    }

    /// Persists the child's value, then updates the record's public-field
    /// set: union with the field's name when the toggle is checked, set
    /// difference otherwise.
    ///
    /// The child is copied before saving so repeated saves never observe
    /// state mutated by an earlier one, and the copy's name is re-set to the
    /// composite's to guard against drift.
    fn save_into(&self, record: &mut dyn VisibilityRecord) -> Result<(), RecordError> {
        let mut child = self.child.clone_boxed();
        child.set_name(&self.name);
        child.save_into(record)?;

        let mut public = record.public_fields();
        let visible = self.checkbox.is_checked();
        if visible {
            public.insert(self.name.clone());
        } else {
            public.remove(&self.name);
        }

        debug!(field = %self.name, visible, "updating public-field set");
        record.set_public_fields(public)
    }

    fn set_form(&mut self, form: &mut FormContext) {
        self.child.set_form(form);
        self.checkbox.set_form(form);

        if self.child.requires_multipart() {
            form.set_encoding(FormEncoding::Multipart);
        }

        self.form = Some(form.name().to_owned());
    }

    /// Casts the child to its read-only variant. For children backed by an
    /// enumerable source the selected value is resolved to its display label
    /// first. The toggle is not reproduced in the read-only view.
    fn readonly_field(&self) -> ReadonlyField {
        let mut copy = self.child.readonly_field();
        if let Some(label) = self.child.selected_label() {
            copy.set_value(Value::String(label));
        }
        copy.set_readonly(true);
        copy
    }

    fn add_extra_class(&mut self, class: &str) {
        self.extra_classes.insert(class.to_owned());
        self.child.add_extra_class(class);
    }

    fn remove_extra_class(&mut self, class: &str) {
        self.extra_classes.remove(class);
        self.child.remove_extra_class(class);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.child.set_attribute(name, value);
    }

    fn clone_boxed(&self) -> Box<dyn InputField> {
        Box::new(self.clone())
    }
}
