//! # cart-parse
//!
//! Parses a cart CSV file and prints its items and total.
//!
//! ## Usage
//! ```bash
//! # Human-readable listing
//! cargo run -p cart-parser --bin cart-parse -- samples/cart.csv
//!
//! # JSON output
//! cargo run -p cart-parser --bin cart-parse -- --format json samples/cart.csv
//!
//! # Show what the parser is doing
//! CART_LOG=cart_parser=debug cargo run -p cart-parser --bin cart-parse -- samples/cart.csv
//! ```
//!
//! ## Exit Codes
//! - `0` - parsed successfully
//! - `1` - validation failed (every error is printed to stderr)
//! - `2` - the file could not be read, or bad arguments/configuration

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use cart_parser::{CartParser, Money, OutputFormat, ParseError, ParseResult, ParserConfig};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cart-parse")]
#[command(about = "Validate a shopping cart CSV and compute its total")]
#[command(version)]
struct Cli {
    /// Cart CSV file (header: Product name,Price,Quantity)
    path: PathBuf,

    /// Output format, overrides CART_OUTPUT_FORMAT
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match ParserConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    match config.env_filter() {
        Ok(filter) => init_tracing(filter),
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    }

    let format = cli.format.unwrap_or(config.output_format);

    match CartParser::new().parse(&cli.path) {
        Ok(result) => match print_result(&result, format) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(error = %e, "Failed to write output");
                ExitCode::from(2)
            }
        },
        Err(ParseError::ValidationFailed { errors }) => {
            eprintln!("Validation failed!");
            for e in &errors {
                eprintln!("  {}", e);
            }
            ExitCode::from(1)
        }
        Err(ParseError::Io(e)) => {
            eprintln!("{}: {}", cli.path.display(), e);
            ExitCode::from(2)
        }
    }
}

/// Installs a stderr subscriber filtered by `CART_LOG`.
fn init_tracing(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_result(result: &ParseResult, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, result)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for item in &result.items {
                writeln!(
                    out,
                    "{:<30} {:>10} x {:<6} {}",
                    item.name,
                    Money::from_amount(item.price).to_string(),
                    item.quantity,
                    item.id
                )?;
            }
            writeln!(out, "Total: {}", result.total_money())?;
        }
    }

    Ok(())
}
