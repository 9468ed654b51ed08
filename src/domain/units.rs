//! Conversion between wei and ether.
//!
//! Balances arrive from the chain as integer wei. They are shown and compared
//! as decimal ether. Both directions are exact: no floating point is involved.

use alloy_primitives::U256;
use rust_decimal::Decimal;

use super::error::DomainError;

/// Decimal places between wei and ether.
pub const ETHER_DECIMALS: u32 = 18;

/// Convert an integer wei amount to decimal ether.
///
/// # Errors
///
/// Returns [`DomainError::OutOfRange`] when the value exceeds the 96-bit
/// mantissa of [`Decimal`] (roughly 79 billion ether).
pub fn wei_to_ether(wei: U256) -> Result<Decimal, DomainError> {
    let out_of_range = || DomainError::OutOfRange {
        value: wei.to_string(),
    };
    let raw: u128 = wei.try_into().map_err(|_| out_of_range())?;
    let raw = i128::try_from(raw).map_err(|_| out_of_range())?;
    let ether =
        Decimal::try_from_i128_with_scale(raw, ETHER_DECIMALS).map_err(|_| out_of_range())?;
    Ok(ether.normalize())
}

/// Convert a decimal ether amount to integer wei.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveAmount`] for zero or negative input and
/// [`DomainError::TooPrecise`] when the amount has more than 18 decimal places.
pub fn ether_to_wei(ether: Decimal) -> Result<U256, DomainError> {
    if ether <= Decimal::ZERO {
        return Err(DomainError::NonPositiveAmount { amount: ether });
    }

    let normalized = ether.normalize();
    let scale = normalized.scale();
    if scale > ETHER_DECIMALS {
        return Err(DomainError::TooPrecise { scale });
    }

    let mantissa = u128::try_from(normalized.mantissa()).map_err(|_| DomainError::OutOfRange {
        value: ether.to_string(),
    })?;
    let factor = U256::from(10u64).pow(U256::from(ETHER_DECIMALS - scale));
    Ok(U256::from(mantissa) * factor)
}
