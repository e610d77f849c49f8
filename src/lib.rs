//! # rusty-rates
//!
//! An in-memory currency exchange-rate registry.
//!
//! Each currency carries one rate quoted against an implicit base currency.
//! Conversions go through that base, so any two quoted (or unquoted)
//! currencies can be converted without a direct pair ever being stored.
//!
//! ## Example
//!
//! ```rust
//! use rusty_rates::prelude::*;
//!
//! let mut registry = RateRegistry::new();
//! registry.set_rate(RateQuote::new("usd", 1.0));
//! registry.set_rate(RateQuote::new("EUR", 0.9));
//!
//! let eur = registry.convert(100.0, "USD", "eur").unwrap();
//! assert!((eur - 90.0).abs() < 1e-9);
//!
//! assert!(matches!(
//!     registry.convert(f64::NAN, "USD", "EUR"),
//!     Err(RatesError::InvalidAmount(_))
//! ));
//! ```

pub mod config;
pub mod convert;
pub mod currency;
pub mod error;
pub mod registry;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::config::RatesConfig;
    pub use crate::convert::{convert_amount, convert_amounts, convert_value, total_value};
    pub use crate::currency::CurrencyCode;
    pub use crate::error::{RatesError, Result};
    pub use crate::registry::{
        RateLookup, RateQuote, RateRegistry, SharedRateRegistry, DEFAULT_RATE,
    };
}
