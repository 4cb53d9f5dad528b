//! Scalgo CLI
//!
//! Reads one document and prints its records in the scale unit.
//!
//! Usage: `scalgo [--json] <DOCUMENT>`
//!
//! Environment:
//! - SCALGO_DATA_PATH: directory searched when `<document>` does not exist
//! - RUST_LOG: log filter for stderr (default `info`)

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use scalgo::Enlistment;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Marks the reference record in table output
const REFERENCE_MARKER: &str = "*";

#[derive(Debug, Parser)]
#[command(name = "scalgo", version, about = "Read a measurement document and print it in its scale unit")]
struct Cli {
    /// Print the enlistment as JSON
    #[arg(long)]
    json: bool,

    /// Document path, or a name under SCALGO_DATA_PATH
    document: String,
}

/// Get the data path from environment
fn data_path() -> Option<PathBuf> {
    env::var_os("SCALGO_DATA_PATH").map(PathBuf::from)
}

/// Use the path as given if it exists, otherwise look in the data path
fn resolve_document(name: &str, data_path: Option<&Path>) -> PathBuf {
    let given = PathBuf::from(name);
    if given.exists() {
        return given;
    }
    match data_path {
        Some(dir) if dir.join(name).exists() => dir.join(name),
        _ => given,
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    enlistment: &'a Enlistment,
    /// Base unit of the scale unit's category, if any
    base_unit: Option<&'static str>,
    scaled_values: Vec<f64>,
}

fn render_json(enlistment: &Enlistment) -> Result<String, Box<dyn std::error::Error>> {
    let report = Report {
        enlistment,
        base_unit: enlistment.scale_unit().map(|u| u.category().base_unit_name()),
        scaled_values: enlistment.scaled_values()?,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn render_table(enlistment: &Enlistment) -> scalgo::Result<String> {
    let values = enlistment.scaled_values()?;
    let unit = enlistment
        .scale_unit()
        .map(|u| u.to_string())
        .unwrap_or_default();
    let width = enlistment.iter().map(|r| r.label().chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for (i, (record, value)) in enlistment.iter().zip(values).enumerate() {
        let marker = if i == enlistment.reference_index() { REFERENCE_MARKER } else { "" };
        let line = format!("{:<width$}  {} {}", record.label(), format_value(value), unit);
        out.push_str(line.trim_end());
        out.push_str(marker);
        out.push('\n');
    }
    Ok(out)
}

/// Up to four decimals, without trailing zeros
fn format_value(value: f64) -> String {
    let s = format!("{:.4}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let path = resolve_document(&cli.document, data_path().as_deref());
    info!(path = %path.display(), "loading document");

    let enlistment = Enlistment::from_path(&path)?;
    info!(
        records = enlistment.len(),
        reference = enlistment.reference().label(),
        "document loaded"
    );

    if cli.json {
        render_json(&enlistment)
    } else {
        Ok(render_table(&enlistment)?)
    }
}

fn main() -> ExitCode {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
