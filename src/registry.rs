//! Exchange-rate registry
//!
//! Holds one quote per currency, each expressed relative to an implicit base
//! currency, and converts amounts by going through that base.
//!
//! # Example
//! ```
//! use rusty_rates::registry::{RateQuote, RateRegistry};
//!
//! let mut registry = RateRegistry::new();
//! registry.set_rate(RateQuote::new("eur", 0.9));
//! registry.set_rate(RateQuote::new("GBP", 0.8));
//!
//! assert_eq!(registry.get_rate("EUR"), 0.9);
//! assert_eq!(registry.get_rate("jpy"), 1.0);
//!
//! let gbp = registry.convert(100.0, "EUR", "GBP").unwrap();
//! assert!((gbp - 88.888_888).abs() < 1e-5);
//! ```

use crate::convert::convert_amount;
use crate::currency::CurrencyCode;
use crate::error::{RatesError, Result};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

/// Rate used for any currency that has never been quoted
pub const DEFAULT_RATE: f64 = 1.0;

/// A single quote as supplied by configuration
///
/// Fields are loose: the code is any string and the rate is not
/// checked for sign or finiteness. Bad rates only show up when converting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    pub currency: String,
    pub rate: f64,
}

impl RateQuote {
    /// Create new quote
    pub fn new(currency: impl Into<String>, rate: f64) -> Self {
        Self {
            currency: currency.into(),
            rate,
        }
    }
}

impl FromStr for RateQuote {
    type Err = RatesError;

    /// Parse from `CODE=RATE` (e.g. `EUR=0.9`)
    fn from_str(s: &str) -> Result<Self> {
        let (code, rate) = s.split_once('=').ok_or_else(|| {
            RatesError::InvalidData(format!("Invalid quote format: {} (expected CODE=RATE)", s))
        })?;

        let rate: f64 = rate.trim().parse().map_err(|e| {
            RatesError::InvalidData(format!("Invalid rate in quote {}: {}", s, e))
        })?;

        Ok(Self::new(code.trim(), rate))
    }
}

/// Read access to a rate table
///
/// Lookups are total: an unknown currency resolves to [`DEFAULT_RATE`].
pub trait RateLookup: Send + Sync {
    /// Get the rate for a currency code (case-insensitive)
    fn get_rate(&self, code: &str) -> f64;

    /// Convert `amount` from one currency to another via the base currency
    fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64> {
        convert_amount(self, amount, from, to)
    }
}

/// In-memory rate table keyed by normalized currency code
///
/// Entries are inserted or overwritten through [`RateRegistry::set_rate`] and
/// live as long as the registry. There is no removal.
#[derive(Debug, Clone, Default)]
pub struct RateRegistry {
    rates: HashMap<CurrencyCode, f64>,
}

impl RateRegistry {
    /// Create new registry with an empty table
    pub fn new() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Insert or overwrite the rate for a currency
    pub fn set_rate(&mut self, quote: RateQuote) {
        let code = CurrencyCode::new(&quote.currency);

        if !(quote.rate.is_finite() && quote.rate > 0.0) {
            log::warn!(
                "Storing non-positive or non-finite rate for {}: {}",
                code,
                quote.rate
            );
        }

        log::debug!("Set rate {} = {}", code, quote.rate);
        self.rates.insert(code, quote.rate);
    }

    /// Get the stored rate, or [`DEFAULT_RATE`] when the code is unknown
    pub fn get_rate(&self, code: &str) -> f64 {
        let code = CurrencyCode::new(code);
        match self.rates.get(code.as_str()) {
            Some(rate) => *rate,
            None => {
                log::trace!("No rate for {}, using default {}", code, DEFAULT_RATE);
                DEFAULT_RATE
            }
        }
    }

    /// Convert `amount` from one currency to another
    ///
    /// Computes `(amount / rate(from)) * rate(to)`. Fails only when `amount`
    /// is not a finite number; zero or negative stored rates flow straight
    /// into the result.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64> {
        convert_amount(self, amount, from, to)
    }

    /// Check whether a rate has been explicitly set
    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(CurrencyCode::new(code).as_str())
    }

    /// Get number of stored quotes
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Owned copy of every stored quote, sorted by code
    pub fn quotes(&self) -> Vec<RateQuote> {
        let mut quotes: Vec<RateQuote> = self
            .rates
            .iter()
            .map(|(code, rate)| RateQuote::new(code.as_str(), *rate))
            .collect();
        quotes.sort_by(|a, b| a.currency.cmp(&b.currency));
        quotes
    }
}

impl RateLookup for RateRegistry {
    fn get_rate(&self, code: &str) -> f64 {
        RateRegistry::get_rate(self, code)
    }
}

impl Extend<RateQuote> for RateRegistry {
    fn extend<I: IntoIterator<Item = RateQuote>>(&mut self, quotes: I) {
        for quote in quotes {
            self.set_rate(quote);
        }
    }
}

impl FromIterator<RateQuote> for RateRegistry {
    fn from_iter<I: IntoIterator<Item = RateQuote>>(quotes: I) -> Self {
        let mut registry = Self::new();
        registry.extend(quotes);
        registry
    }
}

/// Thread-safe handle to a [`RateRegistry`]
///
/// Clones share the same table. Writers take the lock exclusively, so a
/// conversion always sees a table either before or after a given write.
#[derive(Debug, Clone, Default)]
pub struct SharedRateRegistry {
    inner: Arc<RwLock<RateRegistry>>,
}

impl SharedRateRegistry {
    /// Create new shared registry with an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the rate for a currency
    pub fn set_rate(&self, quote: RateQuote) {
        // A poisoned lock still guards a consistent map of plain floats.
        let mut registry = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        registry.set_rate(quote);
    }

    /// Get the stored rate, or [`DEFAULT_RATE`] when the code is unknown
    pub fn get_rate(&self, code: &str) -> f64 {
        let registry = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        registry.get_rate(code)
    }

    /// Convert under a single read lock so both rates come from the same table
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64> {
        let registry = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        registry.convert(amount, from, to)
    }

    /// Owned copy of the current table
    pub fn snapshot(&self) -> RateRegistry {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl From<RateRegistry> for SharedRateRegistry {
    fn from(registry: RateRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }
}

impl RateLookup for SharedRateRegistry {
    fn get_rate(&self, code: &str) -> f64 {
        SharedRateRegistry::get_rate(self, code)
    }

    fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64> {
        SharedRateRegistry::convert(self, amount, from, to)
    }
}
