//! Domain-level error type.
//!
//! Transport agnostic: the HTTP adapter decides status codes and response
//! shape. Validation failures and registry failures convert into [`Error`]
//! so handlers can propagate them with `?`.

use std::fmt;

use tracing::debug;

use super::ports::MemberRegistryError;
use super::{MemberValidationFailure, TraceId};

/// Stable machine-readable failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The registry holds its maximum number of members.
    CapacityExceeded,
    /// The queried name belongs to an existing member.
    NameTaken,
}

impl ErrorCode {
    /// Snake-case label used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::CapacityExceeded => "capacity_exceeded",
            Self::NameTaken => "name_taken",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors emitted by the fallible constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorValidationError {
    /// The message is empty once trimmed.
    EmptyMessage,
}

impl fmt::Display for ErrorValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "error message must not be empty"),
        }
    }
}

impl std::error::Error for ErrorValidationError {}

/// Domain error payload.
///
/// ## Invariants
/// - `message` is non-empty once trimmed.
/// - `trace_id`, when present, is the [`TraceId`] in scope at construction.
///
/// # Examples
/// ```
/// use signup::domain::{Error, ErrorCode};
///
/// let err = Error::name_taken("name already taken");
/// assert_eq!(err.code(), ErrorCode::NameTaken);
/// assert_eq!(err.message(), "name already taken");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
}

impl Error {
    /// Create an error, panicking if the message is blank.
    ///
    /// The trace identifier of the request in scope is captured
    /// automatically.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(code: ErrorCode, message: impl Into<String>) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            trace_id: TraceId::current().map(|id| id.to_string()),
        })
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier of the failing request.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::CapacityExceeded`].
    pub fn capacity_exceeded(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CapacityExceeded, message)
    }

    /// Convenience constructor for [`ErrorCode::NameTaken`].
    pub fn name_taken(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NameTaken, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<MemberValidationFailure> for Error {
    fn from(failure: MemberValidationFailure) -> Self {
        debug!(
            violations = failure.violations().len(),
            "member input failed validation"
        );
        Self::invalid_request(failure.message())
    }
}

impl From<MemberRegistryError> for Error {
    fn from(err: MemberRegistryError) -> Self {
        match err {
            MemberRegistryError::CapacityExceeded { .. } => Self::capacity_exceeded(err.to_string()),
            MemberRegistryError::NameTaken => Self::name_taken(err.to_string()),
        }
    }
}
