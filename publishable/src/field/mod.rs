//! Form-field capabilities and the concrete fields this crate owns.
//!
//! This module provides:
//!
//! - **Traits** (`traits`): the [`InputField`] capability and the
//!   [`Validator`] collector.
//! - **Checkbox** (`checkbox`): [`CheckboxField`], the boolean toggle.
//! - **Readonly** (`readonly`): [`ReadonlyField`], the display variant
//!   produced by read-only transformations.
//! - **Markup** (`markup`): escaping and attribute-assembly helpers.
//!
//! Concrete input types that may be wrapped (text inputs, dropdowns, file
//! uploads) live with the embedding application; they participate here only
//! through [`InputField`].

pub mod checkbox;
pub mod markup;
pub mod readonly;
pub mod traits;

// Re-export everything at the module level for convenience
pub use checkbox::CheckboxField;
pub use markup::escape_html;
pub use readonly::ReadonlyField;
pub use traits::{InputField, Validator};
