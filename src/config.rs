//! Loading quotes from configuration
//!
//! Two formats are supported:
//!
//! - TOML with a `[rates]` table mapping codes to rates
//! - CSV with a `currency,rate` header
//!
//! Both produce [`RateQuote`]s that are applied in order, so later entries
//! overwrite earlier ones for the same code.

use crate::error::{RatesError, Result};
use crate::registry::{RateQuote, RateRegistry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Rates configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatesConfig {
    #[serde(default)]
    pub rates: BTreeMap<String, f64>,
}

impl RatesConfig {
    /// Parse from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| RatesError::Config(e.to_string()))
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents).map_err(|e| match e {
            RatesError::Config(msg) => {
                RatesError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
        log::debug!(
            "Loaded {} rates from {}",
            config.rates.len(),
            path.display()
        );
        Ok(config)
    }

    /// Default config location (`~/.rusty-rates/rates.toml`)
    #[cfg(feature = "cli")]
    pub fn default_path() -> std::path::PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(".rusty-rates")
            .join("rates.toml")
    }

    /// Quotes in code order
    pub fn quotes(&self) -> Vec<RateQuote> {
        self.rates
            .iter()
            .map(|(code, rate)| RateQuote::new(code.as_str(), *rate))
            .collect()
    }

    /// Set every configured rate on an existing registry
    pub fn apply_to(&self, registry: &mut RateRegistry) {
        registry.extend(self.quotes());
    }

    /// Build a fresh registry from this configuration
    pub fn into_registry(self) -> RateRegistry {
        self.quotes().into_iter().collect()
    }
}

/// Read `currency,rate` rows from CSV
///
/// Blank lines are skipped and fields are trimmed. Lines starting with `#`
/// are treated as comments.
pub fn load_quotes_csv<R: Read>(reader: R) -> Result<Vec<RateQuote>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut quotes = Vec::new();
    for (idx, row) in csv_reader.deserialize::<RateQuote>().enumerate() {
        let quote = row.map_err(|e| {
            let line = e
                .position()
                .map(|pos| pos.line())
                .unwrap_or(idx as u64 + 2);
            RatesError::InvalidData(format!("Invalid quote at line {}: {}", line, e))
        })?;
        quotes.push(quote);
    }

    log::debug!("Parsed {} quotes from CSV", quotes.len());
    Ok(quotes)
}

/// Read quotes from a CSV file
pub fn load_quotes_csv_file(path: &Path) -> Result<Vec<RateQuote>> {
    let file = fs::File::open(path)?;
    load_quotes_csv(file)
}
