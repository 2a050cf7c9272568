//! The boolean toggle field.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use super::{
    markup::{class_attribute, escape_html, render_attributes},
    traits::InputField,
};
use crate::{data::is_truthy, form::FormContext};

/// A checkbox-style boolean field.
///
/// The composite owns one of these as its visibility toggle, but the type is
/// an ordinary field in its own right. A disabled checkbox keeps its state
/// and renders non-interactive.
#[derive(Clone, Debug)]
pub struct CheckboxField {
    name: String,
    title: String,
    checked: bool,
    disabled: bool,
    extra_classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    form: Option<String>,
}

impl CheckboxField {
    /// Creates an unchecked, interactive checkbox.
    #[must_use]
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            checked: false,
            disabled: false,
            extra_classes: BTreeSet::new(),
            attributes: BTreeMap::new(),
            form: None,
        }
    }

    /// Whether the checkbox is currently checked.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Sets the checked state directly.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Whether the checkbox renders non-interactive.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Turns the checkbox into its non-interactive representation.
    ///
    /// One-way: a disabled checkbox keeps whatever state it held and renders
    /// with the `disabled` attribute from then on.
    pub fn make_disabled(&mut self) {
        self.disabled = true;
    }

    /// The name of the form this checkbox is associated with, if any.
    #[must_use]
    pub fn form_name(&self) -> Option<&str> {
        self.form.as_deref()
    }

    fn id_attribute(&self) -> String {
        self.form.as_ref().map_or_else(String::new, |form| {
            format!(" id=\"{}\"", escape_html(&format!("{form}_{}", self.name)))
        })
    }
}

impl InputField for CheckboxField {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_value(&mut self, value: Value) {
        self.checked = is_truthy(&value);
    }

    fn value(&self) -> Value {
        Value::Bool(self.checked)
    }

    fn field(&self) -> String {
        let mut markup = format!(
            "<input type=\"checkbox\"{} name=\"{}\"",
            self.id_attribute(),
            escape_html(&self.name)
        );
        markup.push_str(&class_attribute(&self.extra_classes));
        markup.push_str(&render_attributes(&self.attributes));
        if self.checked {
            markup.push_str(" checked=\"checked\"");
        }
        if self.disabled {
            markup.push_str(" disabled=\"disabled\"");
        }
        markup.push_str(" />");
        markup
    }

    fn set_form(&mut self, form: &mut FormContext) {
        self.form = Some(form.name().to_owned());
    }

    fn add_extra_class(&mut self, class: &str) {
        self.extra_classes.insert(class.to_owned());
    }

    fn remove_extra_class(&mut self, class: &str) {
        self.extra_classes.remove(class);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_owned(), value.to_owned());
    }

    fn clone_boxed(&self) -> Box<dyn InputField> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::CheckboxField;
    use crate::{field::InputField, form::FormContext};

    #[test]
    fn renders_name_and_unchecked_state() {
        let checkbox = CheckboxField::new("Visible[Email]", "");
        assert_eq!(
            checkbox.field(),
            "<input type=\"checkbox\" name=\"Visible[Email]\" />"
        );
    }

    #[test]
    fn renders_checked_and_disabled_attributes() {
        let mut checkbox = CheckboxField::new("Visible[Email]", "");
        checkbox.set_checked(true);
        checkbox.make_disabled();
        let markup = checkbox.field();
        assert!(markup.contains(" checked=\"checked\""));
        assert!(markup.contains(" disabled=\"disabled\""));
    }

    #[test]
    fn set_value_applies_loose_truthiness() {
        let mut checkbox = CheckboxField::new("Visible[Email]", "");
        checkbox.set_value(json!("on"));
        assert!(checkbox.is_checked());
        checkbox.set_value(json!("0"));
        assert!(!checkbox.is_checked());
    }

    #[test]
    fn form_association_renders_an_id() {
        let mut form = FormContext::new("ProfileForm");
        let mut checkbox = CheckboxField::new("Visible[Email]", "");
        checkbox.set_form(&mut form);
        assert_eq!(checkbox.form_name(), Some("ProfileForm"));
        assert!(
            checkbox
                .field()
                .contains(" id=\"ProfileForm_Visible[Email]\"")
        );
    }

    #[test]
    fn data_value_is_the_boolean_state() {
        let mut checkbox = CheckboxField::new("Visible[Email]", "");
        checkbox.set_checked(true);
        assert_eq!(checkbox.data_value(), json!(true));
    }

    #[test]
    fn extra_classes_and_attributes_render() {
        let mut checkbox = CheckboxField::new("Visible[Email]", "");
        checkbox.add_extra_class("toggle");
        checkbox.set_attribute("data-role", "visibility");
        let markup = checkbox.field();
        assert!(markup.contains(" class=\"toggle\""));
        assert!(markup.contains(" data-role=\"visibility\""));
        checkbox.remove_extra_class("toggle");
        assert!(!checkbox.field().contains("class"));
    }
}
