//! # verdict
//!
//! A composable validation and error-accumulation library for Rust.
//!
//! ## Overview
//!
//! This library provides the building blocks for enforcing business
//! invariants on domain values before they are allowed to exist:
//!
//! - **Validators**: first-class, combinable predicates over arbitrary
//!   values (`and` composition, contravariant adaptation, a library of
//!   ready-made rules)
//! - **Reports**: order-preserving, field-grouped error aggregation with
//!   merge semantics
//! - **Either**: disjoint-union result propagation, so callers branch on
//!   data instead of catching panics
//! - **Entities**: strongly-typed identifier and entity traits, plus a
//!   reference wallet domain exercising the full consumer contract
//!
//! Two error taxonomies are kept strictly apart. Business-rule violations
//! are *data*: they accumulate as [`report::ValidationError`] entries inside
//! a [`report::ValidationReport`] and travel to the caller through
//! [`control::Either::Left`]. Programmer errors (blank error codes, empty
//! error maps, malformed identifiers at fail-fast boundaries) surface
//! immediately as panics or `Result::Err`, and are never mixed into a
//! report.
//!
//! ## Example
//!
//! ```rust
//! use verdict::report::ValidationReport;
//!
//! let report = ValidationReport::invalid_with(
//!     "amount",
//!     "INVALID_AMOUNT",
//!     "Amount must be positive",
//! );
//! assert!(!report.is_valid());
//! assert_eq!(report.all_codes(), ["INVALID_AMOUNT"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Prelude module for convenient imports.
///
/// Re-exports the types most call sites need.
///
/// # Usage
///
/// ```rust
/// use verdict::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::Either;
    pub use crate::entity::{Entity, EntityId};
    pub use crate::report::{
        ReportBuilder, Severity, ValidationError, ValidationFailure, ValidationReport,
    };
    pub use crate::validate::{rules, RuleViolation, Validator};
}

pub mod control;
pub mod domain;
pub mod entity;
pub mod report;
pub mod validate;

#[cfg(test)]
mod tests {
    use crate::report::ValidationReport;

    #[test]
    fn valid_report_round_trips_through_prelude_types() {
        let report = ValidationReport::valid().combine(ValidationReport::valid());
        assert!(report.is_valid());
    }
}
