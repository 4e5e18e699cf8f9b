//! Order-preserving, field-grouped error aggregation.
//!
//! A [`ValidationReport`] is an immutable snapshot of a validation run:
//! either valid (no errors) or invalid with at least one
//! [`ValidationError`] grouped under the field it concerns. Reports are
//! combined with [`ValidationReport::combine`], which merges the two error
//! maps while preserving insertion order, so a sequence of per-concern
//! checks folds into a single aggregate enumerating *every* violation
//! instead of just the first one.
//!
//! # Invariant
//!
//! For every report, `is_valid() == errors().is_empty()`. The only way to
//! obtain a report is through the factories below, so the two inconsistent
//! states (valid with errors, invalid without errors) are unrepresentable.
//!
//! # Examples
//!
//! ```rust
//! use verdict::report::ValidationReport;
//!
//! let email = ValidationReport::invalid_with("email", "INVALID_FORMAT", "Invalid email");
//! let password = ValidationReport::invalid_with("password", "TOO_SHORT", "Password too short");
//!
//! let combined = email.combine(password);
//! assert!(!combined.is_valid());
//! assert_eq!(combined.all_messages(), ["Invalid email", "Password too short"]);
//! ```

mod error;

pub use error::{Severity, ValidationError};

use serde::Serialize;
use thiserror::Error;

/// Raised when a report was required to be valid but carries errors.
///
/// The payload is every accumulated message joined with `", "`, matching
/// the fail-fast boundary contract: the caller opted out of branching on
/// data, so the failure must enumerate everything at once.
#[derive(Debug, Error)]
#[error("validation failed: {messages}")]
pub struct ValidationFailure {
    messages: String,
}

impl ValidationFailure {
    /// The joined messages of every accumulated error.
    #[must_use]
    pub fn messages(&self) -> &str {
        &self.messages
    }
}

/// An immutable aggregate of validation errors grouped by field.
///
/// Field insertion order and per-field error order are both preserved; all
/// "transitions" are pure functions producing new instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    errors: Vec<(String, Vec<ValidationError>)>,
}

impl ValidationReport {
    /// Creates the canonical valid result: no errors.
    #[must_use]
    pub fn valid() -> Self {
        Self { errors: Vec::new() }
    }

    /// Creates an invalid result with a single error under `field`.
    ///
    /// # Panics
    ///
    /// Panics if `field` is empty or contains whitespace. Field keys name
    /// structured positions in the validated value; a blank key is a
    /// programming error, never user input.
    #[must_use]
    pub fn invalid(field: impl Into<String>, error: ValidationError) -> Self {
        let field = field.into();
        assert_field_name(&field);
        Self {
            errors: vec![(field, vec![error])],
        }
    }

    /// Convenience factory: a single error built from `code` and `message`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`ValidationReport::invalid`]
    /// and [`ValidationError::new`].
    #[must_use]
    pub fn invalid_with(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::invalid(field, ValidationError::new(code, message))
    }

    /// Creates an invalid result with several errors under one field.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty or `field` is blank: an invalid result
    /// must contain at least one error.
    #[must_use]
    pub fn invalid_all(field: impl Into<String>, errors: Vec<ValidationError>) -> Self {
        let field = field.into();
        assert_field_name(&field);
        assert!(
            !errors.is_empty(),
            "an invalid report must contain at least one error"
        );
        Self {
            errors: vec![(field, errors)],
        }
    }

    /// Creates an invalid result from `(field, errors)` pairs, preserving
    /// their order.
    ///
    /// # Panics
    ///
    /// Panics if the collection is empty, if any field key is blank, or if
    /// any per-field error list is empty.
    #[must_use]
    pub fn from_field_errors(
        pairs: impl IntoIterator<Item = (String, Vec<ValidationError>)>,
    ) -> Self {
        let mut report = Self::valid();
        for (field, errors) in pairs {
            report = report.combine(Self::invalid_all(field, errors));
        }
        assert!(
            !report.errors.is_empty(),
            "an invalid report must contain at least one error"
        );
        report
    }

    /// Whether the validation passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All errors grouped by field, in insertion order.
    #[must_use]
    pub fn errors(&self) -> &[(String, Vec<ValidationError>)] {
        &self.errors
    }

    /// The total number of errors across all fields.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.iter().map(|(_, errors)| errors.len()).sum()
    }

    /// The errors associated with `field`, empty if the field is clean.
    #[must_use]
    pub fn errors_for_field(&self, field: &str) -> &[ValidationError] {
        self.errors
            .iter()
            .find(|(name, _)| name == field)
            .map_or(&[], |(_, errors)| errors.as_slice())
    }

    /// Whether `field` has at least one error.
    #[must_use]
    pub fn has_errors_for_field(&self, field: &str) -> bool {
        !self.errors_for_field(field).is_empty()
    }

    /// Whether any error with `code` exists, under any field.
    #[must_use]
    pub fn contains_error_code(&self, code: &str) -> bool {
        self.iter().any(|(_, error)| error.code() == code)
    }

    /// Whether `field` has at least one error with `code`.
    #[must_use]
    pub fn field_has_error_code(&self, field: &str, code: &str) -> bool {
        self.errors_for_field(field)
            .iter()
            .any(|error| error.code() == code)
    }

    /// Iterates over every `(field, error)` pair in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationError)> {
        self.errors
            .iter()
            .flat_map(|(field, errors)| errors.iter().map(move |error| (field.as_str(), error)))
    }

    /// Every error message, flattened in insertion order.
    #[must_use]
    pub fn all_messages(&self) -> Vec<&str> {
        self.iter().map(|(_, error)| error.message()).collect()
    }

    /// Every distinct error code, in first-occurrence order.
    #[must_use]
    pub fn all_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = Vec::new();
        for (_, error) in self.iter() {
            if !codes.contains(&error.code()) {
                codes.push(error.code());
            }
        }
        codes
    }

    /// Groups every `(field, error)` pair by error code.
    ///
    /// Group keys appear in first-occurrence order and each group keeps the
    /// original error order.
    #[must_use]
    pub fn errors_by_code(&self) -> Vec<(String, Vec<(String, ValidationError)>)> {
        let mut groups: Vec<(String, Vec<(String, ValidationError)>)> = Vec::new();
        for (field, error) in self.iter() {
            let entry = (field.to_owned(), error.clone());
            match groups.iter_mut().find(|(code, _)| code == error.code()) {
                Some((_, members)) => members.push(entry),
                None => groups.push((error.code().to_owned(), vec![entry])),
            }
        }
        groups
    }

    /// Combines this report with another.
    ///
    /// If both are valid the result is valid. Otherwise the error maps are
    /// merged: fields keep their first-seen position, and when both
    /// operands carry errors under the same field the lists are
    /// concatenated in `(self, other)` order. Repeated combination is a
    /// left-to-right fold: associative over the *set* of `(field, error)`
    /// pairs, but per-field ordering depends on the fold direction.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        if self.is_valid() && other.is_valid() {
            return Self::valid();
        }
        let mut merged = self.errors;
        for (field, errors) in other.errors {
            match merged.iter_mut().find(|(name, _)| *name == field) {
                Some((_, existing)) => existing.extend(errors),
                None => merged.push((field, errors)),
            }
        }
        Self { errors: merged }
    }

    /// Keeps only the errors whose code appears in `codes`.
    ///
    /// Fields left with no matching errors are dropped; if nothing matches
    /// the result is [`ValidationReport::valid`].
    #[must_use]
    pub fn filter_by_codes(&self, codes: &[&str]) -> Self {
        let filtered: Vec<(String, Vec<ValidationError>)> = self
            .errors
            .iter()
            .filter_map(|(field, errors)| {
                let kept: Vec<ValidationError> = errors
                    .iter()
                    .filter(|error| codes.contains(&error.code()))
                    .cloned()
                    .collect();
                if kept.is_empty() {
                    None
                } else {
                    Some((field.clone(), kept))
                }
            })
            .collect();
        Self { errors: filtered }
    }

    /// Converts the errors to a simplified `(field, joined messages)` list.
    ///
    /// Each field maps to its messages concatenated with `", "`, in
    /// insertion order. Useful for serialization or simplified display.
    #[must_use]
    pub fn to_simple_map(&self) -> Vec<(String, String)> {
        self.errors
            .iter()
            .map(|(field, errors)| {
                let joined = errors
                    .iter()
                    .map(ValidationError::message)
                    .collect::<Vec<_>>()
                    .join(", ");
                (field.clone(), joined)
            })
            .collect()
    }

    /// Applies `formatter` to every error, returning the formatted messages
    /// in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use verdict::report::ValidationReport;
    ///
    /// let report = ValidationReport::invalid_with("email", "INVALID", "Invalid email");
    /// let formatted = report.formatted_messages(|error| {
    ///     format!("{}: {}", error.code(), error.message())
    /// });
    /// assert_eq!(formatted, ["INVALID: Invalid email"]);
    /// ```
    #[must_use]
    pub fn formatted_messages<F>(&self, formatter: F) -> Vec<String>
    where
        F: Fn(&ValidationError) -> String,
    {
        self.iter().map(|(_, error)| formatter(error)).collect()
    }

    /// Fails with a [`ValidationFailure`] if this report is invalid.
    ///
    /// This is the boundary for call sites that choose fail-fast semantics
    /// over branching on data; the failure carries every accumulated
    /// message joined with `", "`.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the report carries at least one error.
    pub fn ensure_valid(&self) -> Result<(), ValidationFailure> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationFailure {
                messages: self.all_messages().join(", "),
            })
        }
    }
}

fn assert_field_name(field: &str) {
    assert!(
        !field.is_empty() && !field.chars().any(char::is_whitespace),
        "field name must be non-empty and contain no whitespace"
    );
}

/// Accumulates per-concern error lists into a single [`ValidationReport`].
///
/// This is the fold that entity `create` operations use: record the errors
/// of each field-level check, then finish with the combined aggregate.
/// Recording an empty error list is a no-op, so clean checks need no
/// special casing.
///
/// # Examples
///
/// ```rust
/// use verdict::report::{ReportBuilder, ValidationError};
///
/// let report = ReportBuilder::new()
///     .record("email", vec![ValidationError::new("INVALID", "Invalid email")])
///     .record("password", Vec::new())
///     .finish();
/// assert!(report.has_errors_for_field("email"));
/// assert!(!report.has_errors_for_field("password"));
/// ```
#[derive(Debug, Default)]
pub struct ReportBuilder {
    report: ValidationReport,
}

impl ReportBuilder {
    /// Creates a builder holding a valid (empty) report.
    #[must_use]
    pub fn new() -> Self {
        Self {
            report: ValidationReport::valid(),
        }
    }

    /// Records the errors of one field-level check.
    ///
    /// # Panics
    ///
    /// Panics if `field` is blank or contains whitespace.
    #[must_use]
    pub fn record(mut self, field: impl Into<String>, errors: Vec<ValidationError>) -> Self {
        let field = field.into();
        assert_field_name(&field);
        if errors.is_empty() {
            return self;
        }
        self.report = self
            .report
            .combine(ValidationReport::invalid_all(field, errors));
        self
    }

    /// Folds another report into the accumulated aggregate.
    #[must_use]
    pub fn merge(mut self, other: ValidationReport) -> Self {
        self.report = self.report.combine(other);
        self
    }

    /// Returns the combined aggregate.
    #[must_use]
    pub fn finish(self) -> ValidationReport {
        self.report
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::valid()
    }
}
