//! Validated identifier newtypes.

use std::fmt;

use serde::Serialize;

use crate::entity::EntityId;
use crate::validate::{rules, RuleViolation, Validator};

/// A wallet identifier.
///
/// Shape is enforced at construction with the strict rule chain: a
/// `WalletId` that exists is well-formed. Equality and hashing follow the
/// wrapped string within this type only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WalletId(String);

impl WalletId {
    /// Creates a wallet id, rejecting malformed values.
    ///
    /// # Errors
    ///
    /// Returns [`RuleViolation`] naming the first failed check when the
    /// value is blank, lacks the `WALLET-` prefix, is shorter than ten
    /// characters, or contains no digit.
    pub fn new(value: impl Into<String>) -> Result<Self, RuleViolation> {
        let value = value.into();
        rules::wallet_id_strict().validate(&value)?;
        Ok(Self(value))
    }
}

impl EntityId for WalletId {
    type Value = String;

    fn value(&self) -> &String {
        &self.0
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An installment identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct InstallmentId(String);

impl InstallmentId {
    /// Creates an installment id, rejecting blank values.
    ///
    /// # Errors
    ///
    /// Returns [`RuleViolation`] when the value is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, RuleViolation> {
        let value = value.into();
        Validator::fatal_rule(
            |v: &str| !v.trim().is_empty(),
            "The installment id must not be blank.",
        )
        .validate(value.as_str())?;
        Ok(Self(value))
    }
}

impl EntityId for InstallmentId {
    type Value = String;

    fn value(&self) -> &String {
        &self.0
    }
}

impl fmt::Display for InstallmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
