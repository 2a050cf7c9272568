//! A composite form field pairing an input with a public-visibility toggle.
//!
//! This crate separates:
//! - **Capabilities**: what a form field, a record, or a data source can do
//!   (e.g. [`InputField`], [`VisibilityRecord`]).
//! - **The composite**: [`CheckableVisibilityField`], which wraps any
//!   [`InputField`] and attaches a checkbox marking the wrapped value as
//!   publicly visible on the owning record.
//!
//! The container assigns submitted values into the composite, the composite
//! resolves and stores the toggle state, and on save it writes the child's
//! value into the record and updates the record's public-field set.
//!
//! What this crate does:
//! - defines the field capability traits and the owned toggle/readonly fields
//! - resolves toggle state from nested request data or a source record
//! - persists the wrapped value and the visibility membership on save
//!
//! What it does not do:
//! - render through a templating engine or define a form framework
//! - store records or implement validation rules
//!
//! Concrete wrapped field types (text inputs, dropdowns, file uploads) live
//! with the embedding application and participate through [`InputField`].

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
pub mod data;
pub mod field;
pub mod form;
pub mod record;
pub mod visibility;

// Re-exports from the field module
pub use field::{CheckboxField, InputField, ReadonlyField, Validator, escape_html};
// Re-exports from the data module
pub use data::{SubmittedData, VISIBLE_KEY};
// Re-exports from the form module
pub use form::{FormContext, FormEncoding};
// Re-exports from the record module
pub use record::{RecordError, VisibilityRecord};
// The composite itself
pub use visibility::CheckableVisibilityField;
