//! File-based configuration tests

use rusty_rates::config::{load_quotes_csv_file, RatesConfig};
use rusty_rates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rates.toml");
    fs::write(&path, "[rates]\neur = 0.9\nGBP = 0.8\n").unwrap();

    let registry = RatesConfig::load(&path).unwrap().into_registry();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get_rate("EUR"), 0.9);
    assert_eq!(registry.get_rate("gbp"), 0.8);
}

#[test]
fn test_missing_toml_file() {
    let dir = TempDir::new().unwrap();
    let result = RatesConfig::load(&dir.path().join("nope.toml"));
    assert!(matches!(result, Err(RatesError::Io(_))));
}

#[test]
fn test_malformed_toml_names_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "rates = 3\n").unwrap();

    let err = RatesConfig::load(&path).unwrap_err();
    assert!(matches!(err, RatesError::Config(_)));
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn test_load_csv_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rates.csv");
    fs::write(&path, "currency,rate\nusd,1.0\njpy,150\nJPY,151\n").unwrap();

    let registry: RateRegistry = load_quotes_csv_file(&path).unwrap().into_iter().collect();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get_rate("jpy"), 151.0);
}

#[test]
fn test_csv_then_toml_layering() {
    let dir = TempDir::new().unwrap();
    let toml_path = dir.path().join("rates.toml");
    let csv_path = dir.path().join("rates.csv");
    fs::write(&toml_path, "[rates]\nEUR = 0.9\nCHF = 0.95\n").unwrap();
    fs::write(&csv_path, "currency,rate\neur,0.92\n").unwrap();

    let mut registry = RatesConfig::load(&toml_path).unwrap().into_registry();
    registry.extend(load_quotes_csv_file(&csv_path).unwrap());

    assert_eq!(registry.get_rate("EUR"), 0.92);
    assert_eq!(registry.get_rate("CHF"), 0.95);
}

#[test]
fn test_csv_missing_column() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rates.csv");
    fs::write(&path, "currency\nEUR\n").unwrap();

    let result = load_quotes_csv_file(&path);
    assert!(matches!(result, Err(RatesError::InvalidData(_))));
}
