//! Metron command line
//!
//! Commands:
//! - parse: Parse a quantity string and show it in its best unit
//! - convert: Show a quantity string in a chosen unit
//! - units: List the units of a kind
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info). Logs go to stderr.

use std::collections::BTreeMap;
use std::env;
use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, Level};
use tracing_subscriber::FmtSubscriber;

use metron_core::ConversionError;
use metron_units::{MassUnit, Quantity, TemperatureUnit, Unit, VolumeUnit};

#[derive(Debug, Parser)]
#[command(name = "metron", version, about = "Parse, convert and format mass, volume and temperature")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a quantity and print it in its best unit
    Parse {
        kind: Kind,
        /// Quantity string, e.g. "1.5kg" or "15°C"
        input: String,
        /// Print a JSON report instead of the display string
        #[arg(long)]
        json: bool,
    },
    /// Print a quantity in the given unit
    Convert {
        kind: Kind,
        input: String,
        /// Target unit symbol, e.g. "lb"
        unit: String,
    },
    /// List the units of a kind
    Units { kind: Kind },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    Mass,
    Volume,
    Temperature,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON view of a parsed quantity
#[derive(Debug, Serialize)]
#[serde(bound(serialize = ""))]
struct Report<'a, U: Unit> {
    input: &'a str,
    display: Quantity<U>,
    zero: bool,
    origin: &'static str,
    best_unit: &'static str,
    values: BTreeMap<&'static str, f64>,
}

macro_rules! for_kind {
    ($kind:expr, $func:ident($($arg:expr),*)) => {
        match $kind {
            Kind::Mass => $func::<MassUnit>($($arg),*),
            Kind::Volume => $func::<VolumeUnit>($($arg),*),
            Kind::Temperature => $func::<TemperatureUnit>($($arg),*),
        }
    };
}

fn parse<U: Unit>(input: &str, json: bool) -> Result<String, CliError> {
    let quantity = Quantity::<U>::parse(input);
    debug!(kind = U::KIND, input, %quantity, "parsed");

    if !json {
        return Ok(quantity.to_string());
    }

    let values = U::registry()
        .units()
        .iter()
        .map(|&unit| (unit.symbol(), quantity.to(unit)))
        .collect();

    let report = Report {
        input,
        display: quantity,
        zero: quantity.is_zero(),
        origin: quantity.origin().symbol(),
        best_unit: quantity.best_unit().symbol(),
        values,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn convert<U: Unit>(input: &str, symbol: &str) -> Result<String, CliError> {
    let quantity = Quantity::<U>::parse(input);
    let value = quantity.value_in(symbol)?;
    debug!(kind = U::KIND, input, symbol, value, "converted");
    Ok(quantity.to_string_in(symbol))
}

fn units<U: Unit>() -> Result<String, CliError> {
    let lines: Vec<String> = U::registry()
        .units()
        .iter()
        .map(|unit| {
            let def = unit.def();
            let system = def.system.map_or("-", |s| s.name());
            format!("{}\t{}\t{}\t{}", def.symbol, def.name, system, def.precision)
        })
        .collect();
    Ok(lines.join("\n"))
}

fn run(command: Command) -> Result<String, CliError> {
    match command {
        Command::Parse { kind, input, json } => for_kind!(kind, parse(&input, json)),
        Command::Convert { kind, input, unit } => for_kind!(kind, convert(&input, &unit)),
        Command::Units { kind } => for_kind!(kind, units()),
    }
}

fn main() -> ExitCode {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
