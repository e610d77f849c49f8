//! rusty-rates CLI - look up rates and convert amounts from the command line
//!
//! ## Example Usage
//!
//! ```bash
//! # Convert using rates from a TOML file
//! rusty-rates --config rates.toml convert 100 EUR GBP
//!
//! # Ad-hoc quotes
//! rusty-rates --set eur=0.9 --set gbp=0.8 convert 100 eur gbp
//!
//! # Show the effective rate for a code
//! rusty-rates --csv rates.csv rate jpy
//!
//! # List loaded quotes
//! rusty-rates list
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use rusty_rates::config::{load_quotes_csv_file, RatesConfig};
use rusty_rates::convert::convert_value;
use rusty_rates::error::Result as RatesResult;
use rusty_rates::registry::{RateQuote, RateRegistry};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process;

/// rusty-rates: currency exchange-rate registry
#[derive(Parser)]
#[command(name = "rusty-rates")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Currency exchange-rate registry and converter", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML rates file (default: ~/.rusty-rates/rates.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// CSV file with `currency,rate` rows, applied after the TOML file
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    /// Ad-hoc quote as CODE=RATE, applied last (repeatable)
    #[arg(short, long = "set", value_name = "CODE=RATE", global = true)]
    set: Vec<RateQuote>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the effective rate for a currency
    Rate {
        /// Currency code (case-insensitive)
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Convert an amount between currencies
    Convert {
        /// Amount to convert
        #[arg(value_name = "AMOUNT", allow_hyphen_values = true)]
        amount: String,

        /// Source currency
        #[arg(value_name = "FROM")]
        from: String,

        /// Destination currency
        #[arg(value_name = "TO")]
        to: String,
    },

    /// List all loaded quotes
    List,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = build_registry(&cli, &RatesConfig::default_path())
        .and_then(|registry| run(&cli.command, &registry));

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Load quotes in order: TOML config, CSV, then `--set` flags
///
/// `default_path` is read only when `--config` is absent and the file exists.
fn build_registry(cli: &Cli, default_path: &Path) -> RatesResult<RateRegistry> {
    let mut registry = RateRegistry::new();

    let config = match &cli.config {
        Some(path) => Some(RatesConfig::load(path)?),
        None => {
            if default_path.exists() {
                Some(RatesConfig::load(default_path)?)
            } else {
                log::debug!("No config at {}", default_path.display());
                None
            }
        }
    };
    if let Some(config) = config {
        config.apply_to(&mut registry);
    }

    if let Some(csv_path) = &cli.csv {
        registry.extend(load_quotes_csv_file(csv_path)?);
    }

    registry.extend(cli.set.iter().cloned());

    if cli.verbose {
        eprintln!(
            "{} {} quotes loaded",
            "rusty-rates".cyan().bold(),
            registry.len()
        );
    }

    Ok(registry)
}

fn run(command: &Commands, registry: &RateRegistry) -> RatesResult<()> {
    match command {
        Commands::Rate { code } => {
            println!("{}", registry.get_rate(code));
        }
        Commands::Convert { amount, from, to } => {
            let amount = parse_amount(amount);
            println!("{}", convert_value(registry, &amount, from, to)?);
        }
        Commands::List => {
            if registry.is_empty() {
                eprintln!("{}", "No rates loaded".dimmed());
            }
            for quote in registry.quotes() {
                println!("{}\t{}", quote.currency.as_str().bold(), quote.rate);
            }
        }
    }
    Ok(())
}

/// Interpret the raw argument as JSON, falling back to a string
///
/// Non-numeric input therefore reaches conversion and fails there as an
/// invalid amount.
fn parse_amount(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
