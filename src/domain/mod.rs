//! A reference wallet domain exercising the full consumer contract.
//!
//! The types here show how the validation core is meant to be consumed:
//! entity constructors return `Either<ValidationReport, Entity>` so that
//! an invalid entity never exists, command executors validate before they
//! execute, and strongly-typed identifiers enforce their shape at
//! construction. Nothing in this module performs I/O.

mod command;
mod contract;
mod ids;
mod installment;
mod money;
mod wallet;

pub use command::{
    CommandExecutor, TransactionKind, TransactionReceipt, TransactionStatus, TransferCommand,
    TransferExecutor,
};
pub use contract::{ContractEvent, InstallmentEvent};
pub use ids::{InstallmentId, WalletId};
pub use installment::{DomainError, Installment};
pub use money::{Money, ParseMoneyError};
pub use wallet::Wallet;
