//! Conversion helpers over any [`RateLookup`]
//!
//! Every helper validates the amount first and then resolves both rates with
//! the lookup's total `get_rate`. No display formatting happens here.

use crate::error::{RatesError, Result};
use crate::registry::RateLookup;
use serde_json::Value;

/// Convert an amount from one currency to another via the base currency
///
/// Returns `(amount / rate(from)) * rate(to)`. A zero source rate yields an
/// infinite or NaN result rather than an error.
///
/// # Example
/// ```
/// use rusty_rates::convert::convert_amount;
/// use rusty_rates::registry::{RateQuote, RateRegistry};
///
/// let mut registry = RateRegistry::new();
/// registry.set_rate(RateQuote::new("EUR", 0.5));
///
/// assert_eq!(convert_amount(&registry, 10.0, "EUR", "USD").unwrap(), 20.0);
/// ```
pub fn convert_amount<R: RateLookup + ?Sized>(
    lookup: &R,
    amount: f64,
    from: &str,
    to: &str,
) -> Result<f64> {
    if !amount.is_finite() {
        return Err(RatesError::invalid_amount(amount));
    }

    let from_rate = lookup.get_rate(from);
    let to_rate = lookup.get_rate(to);
    Ok((amount / from_rate) * to_rate)
}

/// Convert a dynamically typed amount
///
/// Anything that is not a JSON number (strings like `"100"`, null, booleans,
/// arrays, objects) fails with [`RatesError::InvalidAmount`].
pub fn convert_value<R: RateLookup + ?Sized>(
    lookup: &R,
    amount: &Value,
    from: &str,
    to: &str,
) -> Result<f64> {
    let amount = match amount {
        Value::Number(n) => n.as_f64().ok_or_else(|| RatesError::invalid_amount(n))?,
        Value::String(s) => return Err(RatesError::invalid_amount(format!("string {:?}", s))),
        other => return Err(RatesError::invalid_amount(other)),
    };
    convert_amount(lookup, amount, from, to)
}

/// Batch convert multiple amounts into one target currency
pub fn convert_amounts<R: RateLookup + ?Sized>(
    lookup: &R,
    amounts: &[(f64, &str)],
    to: &str,
) -> Result<Vec<f64>> {
    amounts
        .iter()
        .map(|(amount, from)| convert_amount(lookup, *amount, from, to))
        .collect()
}

/// Sum a set of amounts after converting each into `to`
pub fn total_value<R: RateLookup + ?Sized>(
    lookup: &R,
    amounts: &[(f64, &str)],
    to: &str,
) -> Result<f64> {
    let converted = convert_amounts(lookup, amounts, to)?;
    Ok(converted.iter().sum())
}
