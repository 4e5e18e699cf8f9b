//! Wallets: the aggregate root of the reference domain.

use std::collections::HashSet;

use serde::Serialize;

use crate::control::Either;
use crate::domain::installment::INSTALLMENTS_FIELD;
use crate::domain::{ContractEvent, Installment, InstallmentEvent, InstallmentId, Money, WalletId};
use crate::entity::Entity;
use crate::report::{ReportBuilder, ValidationError, ValidationReport};
use crate::validate::{rules, Validator};

/// Field key for balance rule failures.
pub const BALANCE_FIELD: &str = "balance";

/// Field key for contract-number rule failures.
pub const CONTRACT_NUMBER_FIELD: &str = "contract_number";

/// Code bound by every balance business rule.
pub const BALANCE_INVALID: &str = "BALANCE_INVALID";

/// The absolute floor: a balance may never be negative.
pub const MIN_ABSOLUTE_BALANCE: Money = Money::ZERO;

/// The minimum balance a wallet may open with.
pub const MIN_ALLOWED_BALANCE: Money = Money::from_cents(10_00);

/// The maximum balance a wallet may hold.
pub const MAX_ALLOWED_BALANCE: Money = Money::from_cents(1_000_000_00);

/// A wallet: an identified balance with its installment schedule.
///
/// Construction goes through [`Wallet::create`] or [`Wallet::open`], both
/// returning `Either<ValidationReport, Wallet>`; a `Wallet` value always
/// satisfies the balance invariants.
#[derive(Debug, Clone, Serialize)]
pub struct Wallet {
    id: WalletId,
    balance: Money,
    installments: Vec<Installment>,
    report: ValidationReport,
}

impl Wallet {
    /// Validates the candidate values and creates the wallet.
    ///
    /// Balance rules, under the `balance` field: the balance must not be
    /// negative, must not exceed 1 000 000.00, and must be at least 10.00.
    /// The branches are exclusive, so a failing balance yields exactly one
    /// error naming the most fundamental rule it breaks. The installments'
    /// own reports are folded into the aggregate.
    #[must_use]
    pub fn create(
        id: WalletId,
        installments: Vec<Installment>,
        balance: Money,
    ) -> Either<ValidationReport, Self> {
        let mut builder = ReportBuilder::new().record(BALANCE_FIELD, validate_balance(balance));
        for installment in &installments {
            builder = builder.merge(installment.report().clone());
        }
        let report = builder.finish();
        if report.is_valid() {
            Either::Right(Self {
                id,
                balance,
                installments,
                report,
            })
        } else {
            Either::Left(report)
        }
    }

    /// Opens a wallet from a contract event.
    ///
    /// The contract number must satisfy the wallet-id rules, the
    /// installment list must be non-empty and free of duplicate ids, and
    /// every installment must pass its own creation rules. All violations
    /// accumulate into a single report; the opening balance is the sum of
    /// the installment amounts.
    #[must_use]
    pub fn open(event: &ContractEvent) -> Either<ValidationReport, Self> {
        let mut builder = ReportBuilder::new()
            .record(
                CONTRACT_NUMBER_FIELD,
                rules::wallet_id().accumulate(&event.contract_number),
            )
            .record(
                INSTALLMENTS_FIELD,
                installment_list_rules().accumulate(&event.installments),
            );

        let mut installments = Vec::with_capacity(event.installments.len());
        for announced in &event.installments {
            match InstallmentId::new(announced.id.clone()) {
                Ok(id) => {
                    match Installment::create(id, announced.amount, announced.due_date, announced.rate)
                    {
                        Either::Right(installment) => installments.push(installment),
                        Either::Left(report) => builder = builder.merge(report),
                    }
                }
                Err(violation) => {
                    builder = builder.record(
                        INSTALLMENTS_FIELD,
                        vec![ValidationError::new("INSTALLMENT_ID_INVALID", violation.message())],
                    );
                }
            }
        }

        let report = builder.finish();
        if !report.is_valid() {
            return Either::Left(report);
        }

        // The accumulating chain passed, so the strict one cannot fail.
        match WalletId::new(event.contract_number.clone()) {
            Ok(id) => {
                let balance = installments.iter().map(Installment::amount).sum();
                Self::create(id, installments, balance)
            }
            Err(violation) => Either::Left(ValidationReport::invalid(
                CONTRACT_NUMBER_FIELD,
                ValidationError::new("WALLET_ID_INVALID", violation.message()),
            )),
        }
    }

    /// The current balance.
    #[must_use]
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// The installment schedule, in creation order.
    #[must_use]
    pub fn installments(&self) -> &[Installment] {
        &self.installments
    }

    /// The (clean) validation report this wallet was created with.
    #[must_use]
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }
}

impl Entity for Wallet {
    type Id = WalletId;

    fn id(&self) -> &WalletId {
        &self.id
    }
}

impl PartialEq for Wallet {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.balance == other.balance
            && self.installments == other.installments
    }
}

impl Eq for Wallet {}

fn validate_balance(balance: Money) -> Vec<ValidationError> {
    let message = if balance < MIN_ABSOLUTE_BALANCE {
        format!("The balance must not be below {MIN_ABSOLUTE_BALANCE}.")
    } else if balance > MAX_ALLOWED_BALANCE {
        format!("The balance must not exceed {MAX_ALLOWED_BALANCE}.")
    } else if balance < MIN_ALLOWED_BALANCE {
        format!("The balance must be at least {MIN_ALLOWED_BALANCE}.")
    } else {
        return Vec::new();
    };
    vec![ValidationError::new(BALANCE_INVALID, message)]
}

fn installment_list_rules() -> Validator<[InstallmentEvent]> {
    rules::non_empty().and(Validator::new(|events: &[InstallmentEvent]| {
        let mut seen = HashSet::new();
        let duplicated = events.iter().any(|event| !seen.insert(event.id.as_str()));
        if duplicated {
            vec![ValidationError::new(
                "DUPLICATE_ID",
                "The installment ids must be unique.",
            )]
        } else {
            Vec::new()
        }
    }))
}
