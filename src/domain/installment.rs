//! Installments: scheduled payments attached to a wallet.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::control::Either;
use crate::domain::{InstallmentId, Money};
use crate::entity::Entity;
use crate::report::{ReportBuilder, ValidationReport};
use crate::validate::Validator;

/// Field key for installment rule failures.
pub(crate) const INSTALLMENTS_FIELD: &str = "installments";

/// Code bound by every installment business rule.
pub(crate) const INSTALLMENT_INVALID: &str = "INSTALLMENT_INVALID";

/// Raised when a financial computation receives impossible inputs.
///
/// These are programmer errors, not business-rule violations: an
/// installment that exists has already passed its creation rules, so a
/// nonsensical discount rate or a contract dated after the due date means
/// the *call site* is wrong.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    /// The discount rate passed to a present-value computation was
    /// negative.
    #[error("discount rate must not be negative, got {0}")]
    NegativeDiscountRate(f64),
    /// The contract date passed to a present-value computation was after
    /// the installment's due date.
    #[error("due date {due} precedes contract date {contract}")]
    DueDateBeforeContract {
        /// The installment's due date.
        due: NaiveDate,
        /// The contract date the computation was anchored to.
        contract: NaiveDate,
    },
}

/// A scheduled payment: an amount due at a date, accruing at a rate.
///
/// Construction goes through [`Installment::create`], which accumulates
/// every business-rule violation instead of stopping at the first; an
/// `Installment` value therefore always satisfies its invariants.
#[derive(Debug, Clone, Serialize)]
pub struct Installment {
    id: InstallmentId,
    amount: Money,
    due_date: NaiveDate,
    rate: f64,
    report: ValidationReport,
}

impl Installment {
    /// Validates the candidate values and creates the installment.
    ///
    /// Rules, all accumulated under the `installments` field: the amount
    /// must be positive, the rate must lie in `(0, 100]`.
    #[must_use]
    pub fn create(
        id: InstallmentId,
        amount: Money,
        due_date: NaiveDate,
        rate: f64,
    ) -> Either<ValidationReport, Self> {
        let amount_rule = Validator::rule(
            |amount: &Money| *amount > Money::ZERO,
            INSTALLMENT_INVALID,
            "The installment amount must be greater than 0.00.",
        );
        let rate_rule = Validator::rule(
            |rate: &f64| *rate > 0.0 && *rate <= 100.0,
            INSTALLMENT_INVALID,
            "The installment rate must be greater than 0 and at most 100.",
        );
        let report = ReportBuilder::new()
            .record(INSTALLMENTS_FIELD, amount_rule.accumulate(&amount))
            .record(INSTALLMENTS_FIELD, rate_rule.accumulate(&rate))
            .finish();
        if report.is_valid() {
            Either::Right(Self {
                id,
                amount,
                due_date,
                rate,
                report,
            })
        } else {
            Either::Left(report)
        }
    }

    /// The installment amount.
    #[must_use]
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// The date the payment falls due.
    #[must_use]
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// The accrual rate as a percentage in `(0, 100]`.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// The (clean) validation report this installment was created with.
    #[must_use]
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Schedule ordering: due date first, then amount, then rate.
    #[must_use]
    pub fn cmp_schedule(&self, other: &Self) -> Ordering {
        self.due_date
            .cmp(&other.due_date)
            .then(self.amount.cmp(&other.amount))
            .then(self.rate.total_cmp(&other.rate))
    }

    /// Discounts the amount back to `contract_date`.
    ///
    /// Uses a 360-day commercial year: the exponent is the number of whole
    /// 360-day periods between the contract date and the due date,
    /// truncated. The result is rounded half-even to the cent.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] when the discount rate is negative or the
    /// due date precedes the contract date.
    pub fn present_value(
        &self,
        discount_rate: f64,
        contract_date: NaiveDate,
    ) -> Result<Money, DomainError> {
        if discount_rate < 0.0 {
            return Err(DomainError::NegativeDiscountRate(discount_rate));
        }
        let days = (self.due_date - contract_date).num_days();
        if days < 0 {
            return Err(DomainError::DueDateBeforeContract {
                due: self.due_date,
                contract: contract_date,
            });
        }
        let periods = days / 360;
        #[allow(clippy::cast_possible_truncation)]
        let discounted = self.amount.to_f64() / (1.0 + discount_rate).powi(periods as i32);
        Ok(Money::from_f64_half_even(discounted))
    }
}

impl Entity for Installment {
    type Id = InstallmentId;

    fn id(&self) -> &InstallmentId {
        &self.id
    }
}

impl PartialEq for Installment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Installment {}
