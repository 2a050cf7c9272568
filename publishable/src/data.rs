//! The two shapes of data a field value can be assigned from.
//!
//! On submission a field receives the raw nested request data, keyed by field
//! name with a nested `Visible` sub-mapping for the visibility toggles. When
//! a form is pre-populated from an existing record instead, the record itself
//! acts as the data source and the toggle state comes from its public-field
//! set.
//!
//! Missing or malformed keys never fail: absence degrades to an unchecked
//! toggle.

use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::record::VisibilityRecord;

/// The top-level request-data key holding the visibility toggles, so a field
/// named `Email` submits its toggle as `Visible[Email]`.
pub const VISIBLE_KEY: &str = "Visible";

static EMPTY_REQUEST: LazyLock<Map<String, Value>> = LazyLock::new(Map::new);

// =============================================================================
// SubmittedData - Data source for value assignment
// =============================================================================

/// The data source accompanying a value assignment.
#[derive(Clone, Copy)]
pub enum SubmittedData<'a> {
    /// Raw nested request data from a form submission.
    Request(&'a Map<String, Value>),
    /// A record used as a data source, e.g. when pre-populating a form.
    Source(&'a dyn VisibilityRecord),
}

impl SubmittedData<'_> {
    /// A request with no submitted keys; every toggle resolves unchecked.
    #[must_use]
    pub fn empty() -> Self {
        Self::Request(&EMPTY_REQUEST)
    }

    /// Resolves the visibility flag for the field named `name`.
    ///
    /// For request data this is `data["Visible"][name]` being present and
    /// truthy; for a source record it is membership of `name` in the record's
    /// public-field set.
    #[must_use]
    pub fn visible_flag(&self, name: &str) -> bool {
        match self {
            Self::Request(request) => request
                .get(VISIBLE_KEY)
                .and_then(|nested| nested.get(name))
                .is_some_and(is_truthy),
            Self::Source(record) => record.public_fields().contains(name),
        }
    }
}

/// Loose truthiness for raw request values.
///
/// Request data arrives untyped, so a checked toggle may surface as `true`,
/// `1`, or `"on"` depending on the client. `null`, `false`, zero, the empty
/// string, `"0"`, and empty collections are all unchecked.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty() && text != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use serde_json::{Value, json};

    use super::{SubmittedData, is_truthy};
    use crate::record::{RecordError, VisibilityRecord};

    struct SourceRecord {
        public: BTreeSet<String>,
    }

    impl VisibilityRecord for SourceRecord {
        fn public_fields(&self) -> BTreeSet<String> {
            self.public.clone()
        }

        fn set_public_fields(&mut self, fields: BTreeSet<String>) -> Result<(), RecordError> {
            self.public = fields;
            Ok(())
        }

        fn write_field(&mut self, _name: &str, _value: Value) -> Result<(), RecordError> {
            Ok(())
        }
    }

    #[test]
    fn truthiness_of_request_values() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("on")));
        assert!(is_truthy(&json!(["x"])));

        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!("0")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));
    }

    #[test]
    fn empty_request_resolves_unchecked() {
        assert!(!SubmittedData::empty().visible_flag("Email"));
    }

    #[test]
    fn request_flag_resolves_from_nested_mapping() {
        let request = json!({ "Email": "me@example.org", "Visible": { "Email": true } });
        let data = SubmittedData::Request(request.as_object().unwrap());
        assert!(data.visible_flag("Email"));
        assert!(!data.visible_flag("Phone"));
    }

    #[test]
    fn request_without_visible_mapping_resolves_unchecked() {
        let request = json!({ "Email": "me@example.org" });
        let data = SubmittedData::Request(request.as_object().unwrap());
        assert!(!data.visible_flag("Email"));
    }

    #[test]
    fn source_flag_resolves_from_public_field_set() {
        let record = SourceRecord {
            public: BTreeSet::from(["Email".to_string()]),
        };
        let data = SubmittedData::Source(&record);
        assert!(data.visible_flag("Email"));
        assert!(!data.visible_flag("Phone"));
    }
}
