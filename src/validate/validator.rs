//! The `Validator<T>` combinator and its fail-fast escape hatch.

use std::borrow::Borrow;
use std::sync::Arc;

use thiserror::Error;

use crate::report::{ValidationError, ValidationReport};

/// Raised when a fail-fast rule rejects a value.
///
/// Fail-fast rules are the strict flavor of validation: instead of
/// accumulating their failure as data they abort the run with the
/// offending rule's message. Rules built with [`Validator::rule`] never
/// produce this; only [`Validator::fatal_rule`] does.
#[derive(Debug, Clone, Error)]
#[error("validation rule violated: {message}")]
pub struct RuleViolation {
    message: String,
}

impl RuleViolation {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The offending rule's message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

type Rule<T> = Arc<dyn Fn(&T) -> Result<Vec<ValidationError>, RuleViolation> + Send + Sync>;

/// A first-class, combinable validation function over `T`.
///
/// Validators are stateless values: cloning one clones a handle to the
/// same underlying function, and running one never mutates anything.
/// Composition with [`Validator::and`] runs both operands left to right on
/// the same value and concatenates their error lists, so a composed
/// validator reports *every* violation, not just the first.
///
/// # Examples
///
/// ```rust
/// use verdict::validate::Validator;
///
/// let positive = Validator::rule(
///     |n: &i64| *n > 0,
///     "NOT_POSITIVE",
///     "The value must be positive.",
/// );
/// let even = Validator::rule(|n: &i64| n % 2 == 0, "ODD", "The value must be even.");
///
/// let both = positive.and(even);
/// let errors = both.accumulate(&-3);
/// assert_eq!(errors.len(), 2);
/// ```
pub struct Validator<T: ?Sized> {
    run: Rule<T>,
}

impl<T: ?Sized> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T: ?Sized + 'static> Validator<T> {
    /// Wraps an accumulating validation closure.
    ///
    /// The closure returns the list of violations it found; an empty list
    /// means the value passed.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> Vec<ValidationError> + Send + Sync + 'static,
    {
        Self {
            run: Arc::new(move |value| Ok(f(value))),
        }
    }

    /// Builds an accumulating validator from a predicate.
    ///
    /// When the predicate rejects the value, a single error with the given
    /// code and message is reported as data.
    pub fn rule<P>(predicate: P, code: impl Into<String>, message: impl Into<String>) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let code = code.into();
        let message = message.into();
        Self {
            run: Arc::new(move |value| {
                if predicate(value) {
                    Ok(Vec::new())
                } else {
                    Ok(vec![ValidationError::new(code.clone(), message.clone())])
                }
            }),
        }
    }

    /// Builds a fail-fast validator from a predicate.
    ///
    /// When the predicate rejects the value, the run aborts with a
    /// [`RuleViolation`] carrying the message; nothing downstream of this
    /// rule executes.
    pub fn fatal_rule<P>(predicate: P, message: impl Into<String>) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        Self {
            run: Arc::new(move |value| {
                if predicate(value) {
                    Ok(Vec::new())
                } else {
                    Err(RuleViolation::new(message.clone()))
                }
            }),
        }
    }

    /// Runs the validator against a value.
    ///
    /// `Ok(errors)` is the accumulating outcome (empty means the value
    /// passed); `Err` means a fail-fast rule rejected the value and the
    /// run was aborted.
    ///
    /// # Errors
    ///
    /// Returns [`RuleViolation`] when a rule built with
    /// [`Validator::fatal_rule`] rejects the value.
    pub fn validate(&self, value: &T) -> Result<Vec<ValidationError>, RuleViolation> {
        (self.run)(value)
    }

    /// Whether the value passes every rule, strict or accumulating.
    #[must_use]
    pub fn is_valid(&self, value: &T) -> bool {
        matches!(self.validate(value), Ok(errors) if errors.is_empty())
    }

    /// Runs an accumulating validator, returning the violations as data.
    ///
    /// # Panics
    ///
    /// Panics if a fail-fast rule rejects the value. Mixing a strict rule
    /// into an accumulating context is a wiring mistake in the calling
    /// code; use [`Validator::validate`] where both flavors must be
    /// handled.
    #[must_use]
    pub fn accumulate(&self, value: &T) -> Vec<ValidationError> {
        match self.validate(value) {
            Ok(errors) => errors,
            Err(violation) => panic!("fail-fast rule in accumulating context: {violation}"),
        }
    }

    /// Composes two validators over the same type.
    ///
    /// Both run left to right on the same value and their error lists are
    /// concatenated in that order. A fail-fast failure on either side
    /// aborts the composition with that side's violation.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self {
            run: Arc::new(move |value| {
                let mut errors = (self.run)(value)?;
                errors.extend((other.run)(value)?);
                Ok(errors)
            }),
        }
    }

    /// Adapts this validator to a different input type.
    ///
    /// `f` projects the new input down to what this validator checks;
    /// validators are contravariant in their input, so the arrow points
    /// the opposite way from `map`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use verdict::validate::Validator;
    ///
    /// struct Account {
    ///     balance: i64,
    /// }
    ///
    /// let positive = Validator::rule(|n: &i64| *n > 0, "NEGATIVE", "Must be positive.");
    /// let account_ok = positive.contramap(|account: &Account| &account.balance);
    /// assert!(account_ok.is_valid(&Account { balance: 5 }));
    /// ```
    #[must_use]
    pub fn contramap<U, F>(self, f: F) -> Validator<U>
    where
        U: 'static,
        F: Fn(&U) -> &T + Send + Sync + 'static,
    {
        Validator {
            run: Arc::new(move |value| (self.run)(f(value))),
        }
    }

    /// Widens this validator to any type that can be borrowed as `T`.
    ///
    /// This is the zero-cost form of [`Validator::contramap`] for
    /// supertype-shaped relationships: the runtime behavior is identical,
    /// the convenience is purely at the type level.
    #[must_use]
    pub fn evolve<U>(self) -> Validator<U>
    where
        U: Borrow<T> + 'static,
    {
        Validator {
            run: Arc::new(move |value| (self.run)(value.borrow())),
        }
    }

    /// Runs the validator and wraps the accumulated errors under `field`.
    ///
    /// A clean run yields [`ValidationReport::valid`].
    ///
    /// # Errors
    ///
    /// Returns [`RuleViolation`] when a fail-fast rule rejects the value.
    ///
    /// # Panics
    ///
    /// Panics if `field` is blank, as
    /// [`ValidationReport::invalid_all`] does.
    pub fn report(
        &self,
        field: impl Into<String>,
        value: &T,
    ) -> Result<ValidationReport, RuleViolation> {
        let errors = self.validate(value)?;
        if errors.is_empty() {
            Ok(ValidationReport::valid())
        } else {
            Ok(ValidationReport::invalid_all(field, errors))
        }
    }
}
