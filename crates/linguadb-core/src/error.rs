use crate::{locale::Locale, sanitize::SanitizeIssue};
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Structured runtime error with a stable internal classification.
///
/// Most of this library cannot fail: resolution is total and lenient by
/// contract. What remains fallible is construction (duplicate locales),
/// filter validation, and content sanitization.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct Error {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,

    /// Optional structured error detail.
    /// The variant (if present) must correspond to `origin`.
    pub detail: Option<ErrorDetail>,
}

impl Error {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
            detail: None,
        }
    }

    /// Construct a duplicate-locale invariant violation.
    pub(crate) fn duplicate_locale(locale: Locale) -> Self {
        Self {
            class: ErrorClass::InvariantViolation,
            origin: ErrorOrigin::Record,
            message: format!("duplicate translation for locale '{locale}'"),
            detail: Some(ErrorDetail::Record(RecordError::DuplicateLocale { locale })),
        }
    }

    /// Construct a sanitize failure scoped to one content field.
    pub(crate) fn sanitize_field(field: &str, issue: SanitizeIssue) -> Self {
        Self {
            class: ErrorClass::InvariantViolation,
            origin: ErrorOrigin::Sanitize,
            message: format!("content field '{field}': {issue}"),
            detail: Some(ErrorDetail::Sanitize(issue)),
        }
    }

    /// Construct a filter-origin unsupported error.
    pub(crate) fn filter_unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Unsupported, ErrorOrigin::Filter, message)
    }

    #[must_use]
    pub const fn is_duplicate_locale(&self) -> bool {
        matches!(
            self.detail,
            Some(ErrorDetail::Record(RecordError::DuplicateLocale { .. }))
        )
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

///
/// ErrorDetail
///
/// Structured, origin-specific error detail carried by [`Error`].
///

#[derive(Debug, ThisError)]
pub enum ErrorDetail {
    #[error("{0}")]
    Record(RecordError),
    #[error("{0}")]
    Sanitize(SanitizeIssue),
}

///
/// RecordError
///
/// Record-specific structured error detail.
/// Never returned directly; always wrapped in [`ErrorDetail::Record`].
///

#[derive(Debug, ThisError)]
pub enum RecordError {
    #[error("duplicate translation for locale '{locale}'")]
    DuplicateLocale { locale: Locale },
}

///
/// ErrorClass
/// Internal error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    InvariantViolation,
    Unsupported,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvariantViolation => "invariant_violation",
            Self::Unsupported => "unsupported",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Internal origin taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Filter,
    Record,
    Sanitize,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Filter => "filter",
            Self::Record => "record",
            Self::Sanitize => "sanitize",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
