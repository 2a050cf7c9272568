//! Markup helpers shared by the concrete field types.
//!
//! Fields render themselves as plain HTML strings; this module provides the
//! escaping and attribute-assembly primitives they share. Rendering is a pure
//! string transformation with no templating engine involved.

use std::collections::{BTreeMap, BTreeSet};

/// Escapes the five HTML-significant characters in `raw`.
///
/// Used for both attribute values and text content. Everything else is
/// passed through unchanged.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Renders arbitrary attributes as ` key="value"` pairs, escaped and in
/// deterministic (sorted) order. Empty input renders nothing.
#[must_use]
pub(crate) fn render_attributes(attributes: &BTreeMap<String, String>) -> String {
    let mut rendered = String::new();
    for (key, value) in attributes {
        rendered.push(' ');
        rendered.push_str(key);
        rendered.push_str("=\"");
        rendered.push_str(&escape_html(value));
        rendered.push('"');
    }
    rendered
}

/// Renders a ` class="..."` attribute from a class set, or nothing when the
/// set is empty.
#[must_use]
pub(crate) fn class_attribute(classes: &BTreeSet<String>) -> String {
    if classes.is_empty() {
        return String::new();
    }
    let joined = classes.iter().cloned().collect::<Vec<_>>().join(" ");
    format!(" class=\"{}\"", escape_html(&joined))
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use super::{class_attribute, escape_html, render_attributes};

    #[test]
    fn escape_html_replaces_significant_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn escape_html_passes_plain_text_through() {
        assert_eq!(escape_html("PublicEmail"), "PublicEmail");
    }

    #[test]
    fn render_attributes_sorted_and_escaped() {
        let mut attributes = BTreeMap::new();
        attributes.insert("placeholder".to_string(), "a \"b\"".to_string());
        attributes.insert("data-kind".to_string(), "email".to_string());
        assert_eq!(
            render_attributes(&attributes),
            r#" data-kind="email" placeholder="a &quot;b&quot;""#
        );
    }

    #[test]
    fn render_attributes_empty_renders_nothing() {
        assert_eq!(render_attributes(&BTreeMap::new()), "");
    }

    #[test]
    fn class_attribute_joins_with_spaces() {
        let mut classes = BTreeSet::new();
        classes.insert("required".to_string());
        classes.insert("profile-field".to_string());
        assert_eq!(
            class_attribute(&classes),
            r#" class="profile-field required""#
        );
    }

    #[test]
    fn class_attribute_empty_renders_nothing() {
        assert_eq!(class_attribute(&BTreeSet::new()), "");
    }
}
