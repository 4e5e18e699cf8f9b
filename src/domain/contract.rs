//! Contract-opening event payloads.
//!
//! These are the raw, unvalidated records a contract system hands over
//! when a new wallet should be opened. They carry plain strings and
//! numbers; shape enforcement happens in
//! [`Wallet::open`](crate::domain::Wallet::open), which turns an event
//! into validated entities or a report of everything wrong with it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Money;

/// One installment as announced by a contract event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentEvent {
    /// The announced installment identifier.
    pub id: String,
    /// The installment amount.
    pub amount: Money,
    /// The date the payment falls due.
    pub due_date: NaiveDate,
    /// The accrual rate as a percentage.
    pub rate: f64,
}

/// A contract-opening event: the contract number doubles as the wallet
/// identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractEvent {
    /// The contract number, expected to follow the wallet-id shape.
    pub contract_number: String,
    /// The announced installments.
    pub installments: Vec<InstallmentEvent>,
}
