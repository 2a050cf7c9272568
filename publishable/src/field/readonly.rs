//! The non-interactive display variant a field is cast to for read-only
//! presentation contexts.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use super::{
    markup::{class_attribute, escape_html, render_attributes},
    traits::InputField,
};
use crate::{
    form::FormContext,
    record::{RecordError, VisibilityRecord},
};

/// A field rendered as static text instead of an input.
///
/// Produced by [`InputField::readonly_field`]; displays the value it was
/// created with and persists nothing.
#[derive(Clone, Debug)]
pub struct ReadonlyField {
    name: String,
    title: String,
    value: Value,
    readonly: bool,
    extra_classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    form: Option<String>,
}

impl ReadonlyField {
    /// Creates a display variant carrying the source field's name, title and
    /// value. The read-only flag is set separately by the transformation that
    /// produces the copy.
    #[must_use]
    pub fn new(name: impl Into<String>, title: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            value,
            readonly: false,
            extra_classes: BTreeSet::new(),
            attributes: BTreeMap::new(),
            form: None,
        }
    }

    /// Flags the field as read-only.
    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
    }

    /// Whether the field is flagged read-only.
    #[must_use]
    pub const fn is_readonly(&self) -> bool {
        self.readonly
    }

    fn display_text(&self) -> String {
        match &self.value {
            Value::Null => String::new(),
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

impl InputField for ReadonlyField {
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
        self.value = value;
    }

    fn value(&self) -> Value {
        self.value.clone()
    }

    fn field(&self) -> String {
        let mut classes = self.extra_classes.clone();
        if self.readonly {
            classes.insert("readonly".to_string());
        }
        let id = self.form.as_ref().map_or_else(String::new, |form| {
            format!(" id=\"{}\"", escape_html(&format!("{form}_{}", self.name)))
        });
        format!(
            "<span{id}{}{}>{}</span>",
            class_attribute(&classes),
            render_attributes(&self.attributes),
            escape_html(&self.display_text())
        )
    }

    // Display variants never write anything back.
    fn save_into(&self, _record: &mut dyn VisibilityRecord) -> Result<(), RecordError> {
        Ok(())
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

    fn readonly_field(&self) -> ReadonlyField {
        let mut copy = self.clone();
        copy.set_readonly(true);
        copy
    }

    fn clone_boxed(&self) -> Box<dyn InputField> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use serde_json::{Value, json};

    use super::ReadonlyField;
    use crate::{
        field::InputField,
        record::{RecordError, VisibilityRecord},
    };

    struct RejectingRecord;

    impl VisibilityRecord for RejectingRecord {
        fn public_fields(&self) -> BTreeSet<String> {
            BTreeSet::new()
        }

        fn set_public_fields(&mut self, _fields: BTreeSet<String>) -> Result<(), RecordError> {
            Err(RecordError::message("read-only view must not write"))
        }

        fn write_field(&mut self, _name: &str, _value: Value) -> Result<(), RecordError> {
            Err(RecordError::message("read-only view must not write"))
        }
    }

    #[test]
    fn renders_value_as_escaped_text() {
        let mut field = ReadonlyField::new("Bio", "Biography", json!("<script>"));
        field.set_readonly(true);
        assert_eq!(
            field.field(),
            "<span class=\"readonly\">&lt;script&gt;</span>"
        );
    }

    #[test]
    fn null_value_renders_empty_text() {
        let field = ReadonlyField::new("Bio", "Biography", Value::Null);
        assert_eq!(field.field(), "<span></span>");
    }

    #[test]
    fn saving_a_readonly_field_is_a_no_op() {
        let field = ReadonlyField::new("Bio", "Biography", json!("text"));
        let mut record = RejectingRecord;
        assert!(field.save_into(&mut record).is_ok());
    }

    #[test]
    fn readonly_transformation_of_itself_stays_readonly() {
        let field = ReadonlyField::new("Bio", "Biography", json!("text"));
        let copy = InputField::readonly_field(&field);
        assert!(copy.is_readonly());
        assert_eq!(copy.value(), json!("text"));
    }
}
