//! Property-based tests for ValidationReport laws.
//!
//! This module verifies the algebra of report combination and filtering:
//!
//! - **Identity**: combining with `valid()` on either side changes nothing
//! - **Associativity**: combination order never changes the (field, error)
//!   multiset
//! - **Filter round-trip**: filtering by every present code is the identity
//! - **Filter idempotence**: filtering twice equals filtering once
//! - **Validity invariant**: `is_valid()` iff the error map is empty

use proptest::prelude::*;
use verdict::report::{ValidationError, ValidationReport};

#[derive(Debug, Clone)]
struct RawError {
    field: String,
    code: String,
    message: String,
}

fn raw_error() -> impl Strategy<Value = RawError> {
    (
        "[a-z]{1,8}",
        "[A-Z_]{1,8}",
        "[a-z]{1,12}",
    )
        .prop_map(|(field, code, message)| RawError {
            field,
            code,
            message,
        })
}

fn report_from(raw: &[RawError]) -> ValidationReport {
    raw.iter().fold(ValidationReport::valid(), |report, error| {
        report.combine(ValidationReport::invalid_with(
            &error.field,
            &error.code,
            &error.message,
        ))
    })
}

/// The (field, code, message) multiset, order-insensitive.
fn multiset(report: &ValidationReport) -> Vec<(String, String, String)> {
    let mut triples: Vec<(String, String, String)> = report
        .iter()
        .map(|(field, error)| {
            (
                field.to_owned(),
                error.code().to_owned(),
                error.message().to_owned(),
            )
        })
        .collect();
    triples.sort();
    triples
}

// =============================================================================
// Combine Identity
// =============================================================================

proptest! {
    /// valid() is a two-sided identity for combine
    #[test]
    fn prop_combine_identity(raw in prop::collection::vec(raw_error(), 0..8)) {
        let report = report_from(&raw);

        prop_assert_eq!(ValidationReport::valid().combine(report.clone()), report.clone());
        prop_assert_eq!(report.clone().combine(ValidationReport::valid()), report);
    }
}

// =============================================================================
// Combine Associativity (as a multiset)
// =============================================================================

proptest! {
    /// Combination order never changes the (field, error) multiset
    #[test]
    fn prop_combine_associative_on_multisets(
        a in prop::collection::vec(raw_error(), 0..5),
        b in prop::collection::vec(raw_error(), 0..5),
        c in prop::collection::vec(raw_error(), 0..5),
    ) {
        let (a, b, c) = (report_from(&a), report_from(&b), report_from(&c));

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        prop_assert_eq!(multiset(&left), multiset(&right));
    }
}

proptest! {
    /// Combining never loses an error
    #[test]
    fn prop_combine_preserves_error_count(
        a in prop::collection::vec(raw_error(), 0..6),
        b in prop::collection::vec(raw_error(), 0..6),
    ) {
        let (a, b) = (report_from(&a), report_from(&b));
        let total = a.error_count() + b.error_count();

        prop_assert_eq!(a.combine(b).error_count(), total);
    }
}

// =============================================================================
// Filtering
// =============================================================================

proptest! {
    /// Filtering by every present code reproduces the report
    #[test]
    fn prop_filter_by_all_codes_is_identity(raw in prop::collection::vec(raw_error(), 0..8)) {
        let report = report_from(&raw);
        let owned: Vec<String> = report.all_codes().into_iter().map(str::to_owned).collect();
        let codes: Vec<&str> = owned.iter().map(String::as_str).collect();

        prop_assert_eq!(report.filter_by_codes(&codes), report);
    }
}

proptest! {
    /// Filtering twice equals filtering once
    #[test]
    fn prop_filter_is_idempotent(
        raw in prop::collection::vec(raw_error(), 0..8),
        keep in prop::collection::vec("[A-Z_]{1,8}", 0..4),
    ) {
        let report = report_from(&raw);
        let keep: Vec<&str> = keep.iter().map(String::as_str).collect();

        let once = report.filter_by_codes(&keep);
        let twice = once.clone().filter_by_codes(&keep);

        prop_assert_eq!(once, twice);
    }
}

proptest! {
    /// Every surviving error carries a kept code
    #[test]
    fn prop_filter_keeps_only_requested_codes(
        raw in prop::collection::vec(raw_error(), 0..8),
        keep in prop::collection::vec("[A-Z_]{1,8}", 0..4),
    ) {
        let report = report_from(&raw);
        let keep: Vec<&str> = keep.iter().map(String::as_str).collect();

        let filtered = report.filter_by_codes(&keep);
        prop_assert!(filtered.iter().all(|(_, error)| keep.contains(&error.code())));
    }
}

// =============================================================================
// Validity Invariant
// =============================================================================

proptest! {
    /// is_valid() holds exactly when the error map is empty
    #[test]
    fn prop_validity_tracks_the_error_map(raw in prop::collection::vec(raw_error(), 0..8)) {
        let report = report_from(&raw);

        prop_assert_eq!(report.is_valid(), report.errors().is_empty());
        prop_assert_eq!(report.is_valid(), raw.is_empty());
        prop_assert_eq!(report.error_count(), raw.len());
    }
}
