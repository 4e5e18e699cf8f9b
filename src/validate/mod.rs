//! Composable validators and the ready-made rule library.
//!
//! A [`Validator`] is a first-class value wrapping a validation function:
//! it can be stored, passed around, and combined with [`Validator::and`]
//! before ever touching a value. The [`rules`] module provides stateless
//! factory functions for the common checks (presence, string shape,
//! numeric ranges, collection and date rules), each binding a fixed error
//! code and message template.
//!
//! Two flavors exist and are never silently mixed: accumulating rules
//! report failures as [`ValidationError`](crate::report::ValidationError)
//! data, fail-fast rules short-circuit the whole run with a
//! [`RuleViolation`].
//!
//! # Examples
//!
//! ```rust
//! use verdict::validate::{rules, Validator};
//!
//! let validator = rules::not_blank().and(rules::min_len(3));
//! assert!(validator.is_valid(&"abc".to_string()));
//! assert!(!validator.is_valid(&"ab".to_string()));
//! ```

pub mod rules;
mod validator;

pub use validator::{RuleViolation, Validator};
