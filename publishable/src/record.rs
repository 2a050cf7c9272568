//! The record capability a field persists into.
//!
//! This module defines:
//!
//! - [`VisibilityRecord`]: the externally owned record being edited, exposing
//!   its set of publicly visible field names alongside a value-write surface
//! - [`RecordError`]: the opaque storage-failure wrapper that record
//!   implementations surface and this crate only ever propagates
//!
//! Storage itself lives outside this crate; fields interact with a record
//! purely through this capability.

use std::collections::BTreeSet;

use serde_json::Value;
use thiserror::Error;

// =============================================================================
// RecordError - Storage failures surfaced by record implementations
// =============================================================================

/// A failure raised by a record implementation during a read or write.
///
/// This crate adds no error kinds of its own: missing submission keys degrade
/// to an unchecked toggle and validation failures travel through the
/// [`Validator`](crate::field::Validator) capability. The only errors that
/// cross this API are storage failures, and they propagate to the caller
/// without recovery.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RecordError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl RecordError {
    /// Creates an error carrying only a message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an error wrapping an underlying storage failure.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

// =============================================================================
// VisibilityRecord - The record being edited
// =============================================================================

/// A record that tracks which of its fields are publicly visible.
///
/// The composite only ever performs a read, a set union or difference, and a
/// wholesale write of the public-field set; it never inspects any other
/// record state. Child fields persist their values through [`write_field`]
/// using their own semantics.
///
/// The read-modify-write of the public-field set carries no concurrency
/// guard: each save is assumed to run within one exclusive request or
/// transaction scope.
///
/// [`write_field`]: VisibilityRecord::write_field
pub trait VisibilityRecord {
    /// Returns the current set of publicly visible field names.
    fn public_fields(&self) -> BTreeSet<String>;

    /// Replaces the set of publicly visible field names wholesale.
    fn set_public_fields(&mut self, fields: BTreeSet<String>) -> Result<(), RecordError>;

    /// Writes a field value into the record.
    fn write_field(&mut self, name: &str, value: Value) -> Result<(), RecordError>;
}
