//! Ready-made validation rules.
//!
//! Every function here is a stateless factory: it binds a fixed error code
//! and message template, interpolates its parameters at construction time,
//! and returns a [`Validator`] that can be composed with
//! [`Validator::and`] or adapted with [`Validator::contramap`].
//!
//! String rules validate `str` and collection rules validate `[T]`, so
//! they can be widened to owned types with [`Validator::evolve`]:
//!
//! ```rust
//! use verdict::validate::rules;
//!
//! let owned = rules::not_blank().evolve::<String>();
//! assert!(owned.is_valid(&"WALLET-2024-001".to_string()));
//! ```

use std::cmp::Ordering;
use std::fmt::Display;

use chrono::NaiveDate;

use crate::validate::Validator;

/// Stable error codes bound by the rules in this module.
pub mod codes {
    /// A required value was absent.
    pub const REQUIRED: &str = "REQUIRED";
    /// A string was empty or whitespace-only.
    pub const NOT_BLANK: &str = "NOT_BLANK";
    /// A string was shorter than the required minimum.
    pub const MIN_LENGTH: &str = "MIN_LENGTH";
    /// A string did not start with the required prefix.
    pub const PREFIX_MISMATCH: &str = "PREFIX_MISMATCH";
    /// A string contained no digit.
    pub const DIGIT_REQUIRED: &str = "DIGIT_REQUIRED";
    /// A value was not strictly greater than the limit.
    pub const NOT_GREATER: &str = "NOT_GREATER";
    /// A value was below the allowed minimum.
    pub const BELOW_MINIMUM: &str = "BELOW_MINIMUM";
    /// A value was above the allowed maximum.
    pub const ABOVE_MAXIMUM: &str = "ABOVE_MAXIMUM";
    /// A value fell outside the allowed interval.
    pub const OUT_OF_RANGE: &str = "OUT_OF_RANGE";
    /// A value appeared in a forbidden collection.
    pub const FORBIDDEN_VALUE: &str = "FORBIDDEN_VALUE";
    /// A collection was empty.
    pub const EMPTY_COLLECTION: &str = "EMPTY_COLLECTION";
    /// A collection exceeded its maximum size.
    pub const COLLECTION_TOO_LARGE: &str = "COLLECTION_TOO_LARGE";
    /// A collection fell short of its minimum size.
    pub const COLLECTION_TOO_SMALL: &str = "COLLECTION_TOO_SMALL";
    /// A collection did not have the required exact size.
    pub const COLLECTION_SIZE_MISMATCH: &str = "COLLECTION_SIZE_MISMATCH";
    /// A collection was not in the required order.
    pub const NOT_SORTED: &str = "NOT_SORTED";
    /// A date was earlier than the allowed boundary.
    pub const DATE_TOO_EARLY: &str = "DATE_TOO_EARLY";
    /// A date was later than the allowed boundary.
    pub const DATE_TOO_LATE: &str = "DATE_TOO_LATE";
    /// A date fell outside the allowed window.
    pub const DATE_OUT_OF_WINDOW: &str = "DATE_OUT_OF_WINDOW";
}

// =========================================================================
// Presence
// =========================================================================

/// The value must be present.
///
/// Plain (non-optional) parameters are required by the type system and
/// need no rule; this exists for genuinely optional inputs.
#[must_use]
pub fn required<T: Send + Sync + 'static>() -> Validator<Option<T>> {
    Validator::rule(
        Option::is_some,
        codes::REQUIRED,
        "The value is mandatory.",
    )
}

// =========================================================================
// Strings
// =========================================================================

/// The string must contain at least one non-whitespace character.
#[must_use]
pub fn not_blank() -> Validator<str> {
    Validator::rule(
        |value: &str| !value.trim().is_empty(),
        codes::NOT_BLANK,
        "The value must not be blank.",
    )
}

/// The string must have at least `min` characters.
#[must_use]
pub fn min_len(min: usize) -> Validator<str> {
    Validator::rule(
        move |value: &str| value.chars().count() >= min,
        codes::MIN_LENGTH,
        format!("The value must have at least {min} characters."),
    )
}

/// The string must start with `prefix`.
#[must_use]
pub fn matches_prefix(prefix: &str) -> Validator<str> {
    let prefix = prefix.to_owned();
    let message = format!("The value must start with '{prefix}'.");
    Validator::rule(
        move |value: &str| value.starts_with(&prefix),
        codes::PREFIX_MISMATCH,
        message,
    )
}

/// The string must contain at least one ASCII digit.
#[must_use]
pub fn contains_digit() -> Validator<str> {
    Validator::rule(
        |value: &str| value.chars().any(|c| c.is_ascii_digit()),
        codes::DIGIT_REQUIRED,
        "The value must contain at least one digit.",
    )
}

// =========================================================================
// Ordered values
// =========================================================================

/// The value must be strictly greater than `limit`.
#[must_use]
pub fn greater_than<T>(limit: T) -> Validator<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    let message = format!("The value must be greater than {limit}.");
    Validator::rule(move |value: &T| *value > limit, codes::NOT_GREATER, message)
}

/// The value must be greater than or equal to `min`.
#[must_use]
pub fn at_least<T>(min: T) -> Validator<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    let message = format!("The value must be at least {min}.");
    Validator::rule(move |value: &T| *value >= min, codes::BELOW_MINIMUM, message)
}

/// The value must be less than or equal to `max`.
#[must_use]
pub fn at_most<T>(max: T) -> Validator<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    let message = format!("The value must be at most {max}.");
    Validator::rule(move |value: &T| *value <= max, codes::ABOVE_MAXIMUM, message)
}

/// The value must fall within `[min, max]`, both ends inclusive.
#[must_use]
pub fn within<T>(min: T, max: T) -> Validator<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    let message = format!("The value must be between {min} and {max}.");
    Validator::rule(
        move |value: &T| *value >= min && *value <= max,
        codes::OUT_OF_RANGE,
        message,
    )
}

/// The value must not appear in `forbidden`.
///
/// This is the scalar membership rule: the validated value is a single
/// element held against a fixed collection, unlike the collection rules
/// below which validate a whole list at once.
///
/// ```rust
/// use verdict::validate::rules;
///
/// let not_reserved = rules::not_in(vec!["admin".to_string(), "root".to_string()]);
/// assert!(not_reserved.is_valid(&"alice".to_string()));
/// assert!(!not_reserved.is_valid(&"root".to_string()));
/// ```
#[must_use]
pub fn not_in<T>(forbidden: Vec<T>) -> Validator<T>
where
    T: PartialEq + Send + Sync + 'static,
{
    Validator::rule(
        move |value: &T| !forbidden.contains(value),
        codes::FORBIDDEN_VALUE,
        "The value must not be present in the given collection.",
    )
}

// =========================================================================
// Collections
// =========================================================================

/// The collection must contain at least one element.
#[must_use]
pub fn non_empty<T: Send + Sync + 'static>() -> Validator<[T]> {
    Validator::rule(
        |values: &[T]| !values.is_empty(),
        codes::EMPTY_COLLECTION,
        "The collection must not be empty.",
    )
}

/// The collection must have at most `max` elements.
#[must_use]
pub fn max_size<T: Send + Sync + 'static>(max: usize) -> Validator<[T]> {
    Validator::rule(
        move |values: &[T]| values.len() <= max,
        codes::COLLECTION_TOO_LARGE,
        format!("The collection must have at most {max} elements."),
    )
}

/// The collection must have at least `min` elements.
#[must_use]
pub fn min_size<T: Send + Sync + 'static>(min: usize) -> Validator<[T]> {
    Validator::rule(
        move |values: &[T]| values.len() >= min,
        codes::COLLECTION_TOO_SMALL,
        format!("The collection must have at least {min} elements."),
    )
}

/// The collection must have exactly `size` elements.
#[must_use]
pub fn exact_size<T: Send + Sync + 'static>(size: usize) -> Validator<[T]> {
    Validator::rule(
        move |values: &[T]| values.len() == size,
        codes::COLLECTION_SIZE_MISMATCH,
        format!("The collection must have exactly {size} elements."),
    )
}

/// No element may satisfy the predicate.
///
/// The code and message are caller-supplied so the rule can name the
/// business condition it enforces (a duplicate identifier in a batch, for
/// example) instead of a generic predicate failure.
#[must_use]
pub fn none_match<T, P>(
    predicate: P,
    code: impl Into<String>,
    message: impl Into<String>,
) -> Validator<[T]>
where
    T: Send + Sync + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    Validator::rule(
        move |values: &[T]| !values.iter().any(&predicate),
        code,
        message,
    )
}

/// Every element must satisfy the predicate.
#[must_use]
pub fn all_match<T, P>(
    predicate: P,
    code: impl Into<String>,
    message: impl Into<String>,
) -> Validator<[T]>
where
    T: Send + Sync + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    Validator::rule(
        move |values: &[T]| values.iter().all(&predicate),
        code,
        message,
    )
}

/// At least one element must satisfy the predicate.
#[must_use]
pub fn any_match<T, P>(
    predicate: P,
    code: impl Into<String>,
    message: impl Into<String>,
) -> Validator<[T]>
where
    T: Send + Sync + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    Validator::rule(
        move |values: &[T]| values.iter().any(&predicate),
        code,
        message,
    )
}

/// The collection must be sorted in non-decreasing natural order.
#[must_use]
pub fn sorted<T>() -> Validator<[T]>
where
    T: PartialOrd + Send + Sync + 'static,
{
    Validator::rule(
        |values: &[T]| values.windows(2).all(|pair| pair[0] <= pair[1]),
        codes::NOT_SORTED,
        "The collection must be sorted.",
    )
}

/// The collection must be sorted according to `compare`.
#[must_use]
pub fn sorted_by<T, F>(compare: F) -> Validator<[T]>
where
    T: Send + Sync + 'static,
    F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
    Validator::rule(
        move |values: &[T]| {
            values
                .windows(2)
                .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
        },
        codes::NOT_SORTED,
        "The collection must be sorted.",
    )
}

// =========================================================================
// Dates
// =========================================================================

/// The date must be strictly after `boundary`.
///
/// Date rules take every reference date as a parameter; none of them read
/// a clock.
#[must_use]
pub fn after(boundary: NaiveDate) -> Validator<NaiveDate> {
    let message = format!("The date must be after {boundary}.");
    Validator::rule(
        move |date: &NaiveDate| *date > boundary,
        codes::DATE_TOO_EARLY,
        message,
    )
}

/// The date must be strictly before `boundary`.
#[must_use]
pub fn before(boundary: NaiveDate) -> Validator<NaiveDate> {
    let message = format!("The date must be before {boundary}.");
    Validator::rule(
        move |date: &NaiveDate| *date < boundary,
        codes::DATE_TOO_LATE,
        message,
    )
}

/// The date must lie within `today - days_before ..= today + days_after`.
#[must_use]
pub fn within_days(today: NaiveDate, days_before: u32, days_after: u32) -> Validator<NaiveDate> {
    let lower = today - chrono::Duration::days(i64::from(days_before));
    let upper = today + chrono::Duration::days(i64::from(days_after));
    let message = format!("The date must be between {lower} and {upper}.");
    Validator::rule(
        move |date: &NaiveDate| *date >= lower && *date <= upper,
        codes::DATE_OUT_OF_WINDOW,
        message,
    )
}

// =========================================================================
// Composite identifier rules
// =========================================================================

/// The wallet identifier prefix every id must carry.
pub const WALLET_ID_PREFIX: &str = "WALLET-";

/// Minimum accepted wallet identifier length.
pub const WALLET_ID_MIN_LENGTH: usize = 10;

/// The full wallet-identifier rule chain, accumulating.
///
/// An id must be non-blank, start with `WALLET-`, have at least ten
/// characters, and contain a digit. All four checks run, so a malformed
/// id reports every shortcoming at once:
///
/// ```rust
/// use verdict::validate::rules;
///
/// let errors = rules::wallet_id().accumulate("WALLET-");
/// assert_eq!(errors.len(), 2);
/// ```
#[must_use]
pub fn wallet_id() -> Validator<str> {
    not_blank()
        .and(matches_prefix(WALLET_ID_PREFIX))
        .and(min_len(WALLET_ID_MIN_LENGTH))
        .and(contains_digit())
}

/// The wallet-identifier rule chain built from fail-fast rules.
///
/// Identical checks to [`wallet_id`], but the first failure aborts the
/// run with a [`RuleViolation`](crate::validate::RuleViolation) instead of
/// accumulating. Used at boundaries where a malformed id is a programming
/// error rather than user input.
#[must_use]
pub fn wallet_id_strict() -> Validator<str> {
    Validator::fatal_rule(
        |value: &str| !value.trim().is_empty(),
        "The wallet id must not be blank.",
    )
    .and(Validator::fatal_rule(
        |value: &str| value.starts_with(WALLET_ID_PREFIX),
        format!("The wallet id must start with '{WALLET_ID_PREFIX}'."),
    ))
    .and(Validator::fatal_rule(
        |value: &str| value.chars().count() >= WALLET_ID_MIN_LENGTH,
        format!("The wallet id must have at least {WALLET_ID_MIN_LENGTH} characters."),
    ))
    .and(Validator::fatal_rule(
        |value: &str| value.chars().any(|c| c.is_ascii_digit()),
        "The wallet id must contain at least one digit.",
    ))
}
