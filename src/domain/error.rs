//! Domain validation errors for value conversions.
//!
//! Returned when an amount cannot be represented exactly in the chain's
//! smallest unit, or a chain value does not fit the decimal representation.
//!
//! # Examples
//!
//! ```
//! use walletctl::domain::error::DomainError;
//! use walletctl::domain::units::ether_to_wei;
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! // 19 decimal places is finer than one wei
//! let amount = Decimal::from_str("0.0000000000000000001").unwrap();
//! assert!(matches!(ether_to_wei(amount), Err(DomainError::TooPrecise { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when unit conversion invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Transfer amounts must be strictly positive.
    #[error("amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// The invalid amount that was provided.
        amount: rust_decimal::Decimal,
    },

    /// Amounts finer than one wei cannot be sent.
    #[error("amount has {scale} decimal places, at most 18 are allowed")]
    TooPrecise {
        /// Number of decimal places in the provided amount.
        scale: u32,
    },

    /// Value does not fit the target representation.
    #[error("value {value} is out of range")]
    OutOfRange {
        /// The value that overflowed, rendered as text.
        value: String,
    },
}
