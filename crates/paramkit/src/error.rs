//! Parameter access errors.
//!
//! Accessors fail in exactly two ways: the parameter is not bound at all, or
//! its text does not convert to the requested kind. [`ParamError`] records
//! which one happened, where the parameter was looked up, and its key.

use crate::kind::ConversionError;
use http::StatusCode;
use std::fmt;

/// Where a parameter was looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamLocation {
    /// Path parameters bound by the router (e.g., `/users/{id}`)
    Path,
    /// Query string parameters
    Query,
}

impl fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path => write!(f, "path"),
            Self::Query => write!(f, "query"),
        }
    }
}

/// The two ways a parameter accessor can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamErrorKind {
    /// The key is not bound: an empty path binding for the string kind, or
    /// a key absent from the query string.
    MissingParameter,
    /// The bound text is malformed or out of range for the requested kind.
    ConversionFailed,
}

/// Error returned by every path and query accessor.
///
/// # Example
///
/// ```rust
/// use paramkit::{ParamError, ParamErrorKind, ParamLocation};
/// use http::StatusCode;
///
/// let err = ParamError::missing(ParamLocation::Query, "limit");
/// assert_eq!(err.kind(), ParamErrorKind::MissingParameter);
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// assert_eq!(err.to_string(), "missing query parameter 'limit'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamError {
    location: ParamLocation,
    kind: ParamErrorKind,
    field: String,
    cause: Option<ConversionError>,
}

impl ParamError {
    /// Creates an error for a parameter that is not bound.
    #[must_use]
    pub fn missing(location: ParamLocation, field: impl Into<String>) -> Self {
        Self {
            location,
            kind: ParamErrorKind::MissingParameter,
            field: field.into(),
            cause: None,
        }
    }

    /// Creates an error for bound text that failed to convert.
    #[must_use]
    pub fn conversion_failed(
        location: ParamLocation,
        field: impl Into<String>,
        cause: ConversionError,
    ) -> Self {
        Self {
            location,
            kind: ParamErrorKind::ConversionFailed,
            field: field.into(),
            cause: Some(cause),
        }
    }

    /// Returns which failure this is.
    #[must_use]
    pub fn kind(&self) -> ParamErrorKind {
        self.kind
    }

    /// Returns true if the parameter was not bound.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.kind == ParamErrorKind::MissingParameter
    }

    /// Returns true if the bound text failed to convert.
    #[must_use]
    pub fn is_conversion_failed(&self) -> bool {
        self.kind == ParamErrorKind::ConversionFailed
    }

    /// Returns where the parameter was looked up.
    #[must_use]
    pub fn location(&self) -> ParamLocation {
        self.location
    }

    /// Returns the parameter key.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the underlying conversion failure, if any.
    #[must_use]
    pub fn conversion_error(&self) -> Option<&ConversionError> {
        self.cause.as_ref()
    }

    /// Returns the HTTP status a handler should answer with.
    ///
    /// Both kinds are client errors.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// Returns the error code suitable for error envelopes.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self.kind {
            ParamErrorKind::MissingParameter => "MISSING_PARAMETER",
            ParamErrorKind::ConversionFailed => "INVALID_PARAMETER",
        }
    }
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            None => write!(f, "missing {} parameter '{}'", self.location, self.field),
            Some(cause) => write!(
                f,
                "invalid {} parameter '{}': {cause}",
                self.location, self.field
            ),
        }
    }
}

impl std::error::Error for ParamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}
