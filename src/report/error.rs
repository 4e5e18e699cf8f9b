//! Individual validation errors: a stable code, a human-readable message,
//! optional metadata, a severity level, and a creation timestamp.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// How serious a validation error is.
///
/// Defaults to [`Severity::Error`]; the ordering goes from least to most
/// severe, so severities can be compared directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    /// Informational finding, not a failure on its own.
    Info,
    /// Suspicious but tolerable state.
    Warning,
    /// A business rule was violated.
    #[default]
    Error,
    /// A violation serious enough to abort the surrounding operation.
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        };
        f.write_str(label)
    }
}

/// An individual validation error.
///
/// Error codes should be well-defined constants so that callers can handle
/// failures programmatically; the message is the human-facing description.
/// Metadata is an insertion-ordered list of named values that can carry the
/// runtime context of the failure (the offending value, the limit that was
/// exceeded, and so on).
///
/// Instances are immutable once built. Equality is by value over code,
/// message, metadata, and severity; the creation timestamp is deliberately
/// excluded so that identical rule failures compare equal across runs.
///
/// # Examples
///
/// ```rust
/// use verdict::report::{Severity, ValidationError};
///
/// let error = ValidationError::new("BALANCE_INVALID", "The balance is mandatory.")
///     .with_severity(Severity::Critical)
///     .with_metadata("limit", serde_json::json!(10.00));
///
/// assert_eq!(error.code(), "BALANCE_INVALID");
/// assert_eq!(error.severity(), Severity::Critical);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    code: String,
    message: String,
    metadata: Vec<(String, Value)>,
    severity: Severity,
    timestamp: DateTime<Utc>,
}

impl ValidationError {
    /// Creates a validation error from a code and a message.
    ///
    /// The severity defaults to [`Severity::Error`], the metadata to empty,
    /// and the timestamp to the moment of construction.
    ///
    /// # Panics
    ///
    /// Panics if `code` or `message` is blank. A blank code or message is a
    /// configuration mistake in the calling code, not a business-rule
    /// violation, so it fails fast instead of being accumulated.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        let code = code.into();
        let message = message.into();
        assert!(
            !code.trim().is_empty(),
            "validation error code must not be blank"
        );
        assert!(
            !message.trim().is_empty(),
            "validation error message must not be blank"
        );
        Self {
            code,
            message,
            metadata: Vec::new(),
            severity: Severity::default(),
            timestamp: Utc::now(),
        }
    }

    /// Attaches a named metadata value, preserving insertion order.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.push((key.into(), value));
        self
    }

    /// Overrides the severity level.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// The stable error code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// All metadata entries in insertion order.
    #[must_use]
    pub fn metadata(&self) -> &[(String, Value)] {
        &self.metadata
    }

    /// Looks up a metadata value by key, returning the first match.
    #[must_use]
    pub fn metadata_value(&self, key: &str) -> Option<&Value> {
        self.metadata
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// The severity of this error.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// When this error was created.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl PartialEq for ValidationError {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.message == other.message
            && self.metadata == other.metadata
            && self.severity == other.severity
    }
}

impl Eq for ValidationError {}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}
