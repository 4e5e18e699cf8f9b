//! Command execution gated on validation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::control::Either;
use crate::domain::{Money, WalletId};
use crate::report::ValidationReport;

/// A command handler that validates before it executes.
///
/// [`CommandExecutor::run`] is the template: gather the rule failures,
/// short-circuit with `Left` when any exist, otherwise execute and wrap
/// the response in `Right`. Implementors supply the rules and the effect;
/// the gating is uniform.
pub trait CommandExecutor {
    /// The command payload this executor handles.
    type Command;
    /// The success response.
    type Response;

    /// Collects every rule failure for the command.
    fn validate_rules(&self, command: &Self::Command) -> ValidationReport;

    /// Performs the command. Only called on a command that passed
    /// [`CommandExecutor::validate_rules`].
    fn execute(&self, command: &Self::Command) -> Self::Response;

    /// Validates, then executes on success.
    fn run(&self, command: &Self::Command) -> Either<ValidationReport, Self::Response> {
        let report = self.validate_rules(command);
        if report.is_valid() {
            Either::Right(self.execute(command))
        } else {
            tracing::debug!(
                errors = report.error_count(),
                "command rejected by validation"
            );
            Either::Left(report)
        }
    }
}

/// The kind of money movement a receipt records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransactionKind {
    /// Money moved between two wallets.
    Transfer,
    /// Money entered a wallet from outside.
    Deposit,
    /// Money left a wallet to outside.
    Withdrawal,
}

/// The outcome recorded on a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransactionStatus {
    /// The movement completed.
    Success,
    /// The movement was attempted and failed.
    Failed,
    /// The movement is awaiting settlement.
    Pending,
}

/// The record produced by a successful money movement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionReceipt {
    /// Unique id of this transaction.
    pub transaction_id: Uuid,
    /// When the transaction was recorded.
    pub timestamp: DateTime<Utc>,
    /// The wallet the money left.
    pub source_wallet: WalletId,
    /// The wallet the money entered, absent for withdrawals.
    pub target_wallet: Option<WalletId>,
    /// The amount moved, excluding the fee.
    pub amount: Money,
    /// What kind of movement this was.
    pub kind: TransactionKind,
    /// How the movement ended.
    pub status: TransactionStatus,
    /// The fee charged on top of the amount.
    pub fee: Money,
}

/// A request to move money between two wallets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferCommand {
    /// The wallet the money leaves.
    pub source: WalletId,
    /// The wallet the money enters.
    pub target: WalletId,
    /// The amount to move.
    pub amount: Money,
    /// The fee charged for the transfer.
    pub fee: Money,
}

/// Executes transfers between wallets.
///
/// # Examples
///
/// ```rust
/// use verdict::domain::{Money, TransferCommand, TransferExecutor, WalletId};
/// use verdict::domain::CommandExecutor;
///
/// let command = TransferCommand {
///     source: WalletId::new("WALLET-2024-001").unwrap(),
///     target: WalletId::new("WALLET-2024-002").unwrap(),
///     amount: Money::from_cents(50_00),
///     fee: Money::from_cents(1_00),
/// };
/// let outcome = TransferExecutor.run(&command);
/// assert!(outcome.is_right());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferExecutor;

impl CommandExecutor for TransferExecutor {
    type Command = TransferCommand;
    type Response = TransactionReceipt;

    fn validate_rules(&self, command: &TransferCommand) -> ValidationReport {
        let mut report = ValidationReport::valid();
        if command.amount <= Money::ZERO {
            report = report.combine(ValidationReport::invalid_with(
                "amount",
                "INVALID_AMOUNT",
                "The transfer amount must be positive.",
            ));
        }
        if command.fee < Money::ZERO {
            report = report.combine(ValidationReport::invalid_with(
                "fee",
                "INVALID_FEE",
                "The transfer fee must not be negative.",
            ));
        }
        if command.source == command.target {
            report = report.combine(ValidationReport::invalid_with(
                "target",
                "SAME_WALLET",
                "The source and target wallets must differ.",
            ));
        }
        report
    }

    fn execute(&self, command: &TransferCommand) -> TransactionReceipt {
        let receipt = TransactionReceipt {
            transaction_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            source_wallet: command.source.clone(),
            target_wallet: Some(command.target.clone()),
            amount: command.amount,
            kind: TransactionKind::Transfer,
            status: TransactionStatus::Success,
            fee: command.fee,
        };
        tracing::debug!(
            transaction_id = %receipt.transaction_id,
            amount = %receipt.amount,
            "transfer executed"
        );
        receipt
    }
}
