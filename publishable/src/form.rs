//! The form-container collaborator.
//!
//! A [`FormContext`] stands in for the form a field is installed into. The
//! only state this crate cares about is the submission encoding: attaching an
//! upload-capable field escalates the form to multipart before rendering.

// =============================================================================
// FormEncoding - Submission encoding modes
// =============================================================================

/// The submission encoding a form renders with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormEncoding {
    /// Standard `application/x-www-form-urlencoded` submission.
    #[default]
    UrlEncoded,
    /// `multipart/form-data` submission, required for binary file content.
    Multipart,
}

impl FormEncoding {
    /// Returns the MIME type rendered into the form's `enctype` attribute.
    #[must_use]
    pub const fn as_mime(self) -> &'static str {
        match self {
            Self::UrlEncoded => "application/x-www-form-urlencoded",
            Self::Multipart => "multipart/form-data",
        }
    }
}

// =============================================================================
// FormContext - The owning form
// =============================================================================

/// The owning form a field is associated with via
/// [`InputField::set_form`](crate::field::InputField::set_form).
///
/// Encoding escalation is one-directional in practice: fields only ever move
/// a form from [`FormEncoding::UrlEncoded`] to [`FormEncoding::Multipart`].
#[derive(Clone, Debug)]
pub struct FormContext {
    name: String,
    encoding: FormEncoding,
}

impl FormContext {
    /// Creates a form context with the default urlencoded submission mode.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            encoding: FormEncoding::default(),
        }
    }

    /// The form's name, used by fields for DOM id derivation.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current submission encoding.
    #[must_use]
    pub const fn encoding(&self) -> FormEncoding {
        self.encoding
    }

    /// Sets the submission encoding.
    pub fn set_encoding(&mut self, encoding: FormEncoding) {
        self.encoding = encoding;
    }
}

#[cfg(test)]
mod tests {
    use super::{FormContext, FormEncoding};

    #[test]
    fn new_form_is_urlencoded() {
        let form = FormContext::new("ProfileForm");
        assert_eq!(form.encoding(), FormEncoding::UrlEncoded);
        assert_eq!(form.name(), "ProfileForm");
    }

    #[test]
    fn encoding_can_be_escalated() {
        let mut form = FormContext::new("ProfileForm");
        form.set_encoding(FormEncoding::Multipart);
        assert_eq!(form.encoding(), FormEncoding::Multipart);
        assert_eq!(form.encoding().as_mime(), "multipart/form-data");
    }
}
