//! Command-line front end shared by the `b58-prefix` binary.

use crate::catalog::ResolvedEntry;
use crate::codec::{asciidec, b58dec};
use crate::config::{load_config, Config};
use crate::error::Result;
use crate::prefix::{solve, verify_version_bytes, Prefix, SearchLimits};
use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(
    name = "b58-prefix",
    version,
    about = "Compute base58check version bytes for a human-readable prefix"
)]
pub struct Cli {
    /// Configuration file (defaults to ./b58prefix.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the version bytes and encoded length for a prefix
    Compute {
        #[arg(long)]
        prefix: String,
        /// Payload length in bytes
        #[arg(long)]
        length: usize,
        /// Overrides search.max_version_bytes
        #[arg(long)]
        max_version_bytes: Option<usize>,
    },
    /// Check that given version bytes always encode with a prefix
    Verify {
        #[arg(long)]
        prefix: String,
        #[arg(long)]
        length: usize,
        /// Comma separated, e.g. 5,186,196
        #[arg(long, value_delimiter = ',', required = true)]
        version_bytes: Vec<u8>,
    },
    /// Decode a base-58 word as an integer
    Decode { word: String },
    /// Resolve and list the configured prefix catalog
    Catalog,
    /// Find the catalog entry a base58check string was encoded with
    Identify { encoded: String },
}

/// Installs the stderr log subscriber for the given `-v` count.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs a parsed command line, loading configuration from disk.
///
/// Returns `false` when a check (`verify`, `identify`) came out negative.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<bool> {
    let config = load_config(cli.config.as_deref())?;
    run_with_config(cli, &config, out)
}

pub fn run_with_config(cli: &Cli, config: &Config, out: &mut impl Write) -> Result<bool> {
    match &cli.command {
        Command::Compute {
            prefix,
            length,
            max_version_bytes,
        } => {
            let limits = SearchLimits {
                max_version_bytes: max_version_bytes.unwrap_or(config.search.max_version_bytes),
            };
            let solution = solve(&Prefix::new(prefix)?, *length, &limits)?;
            if cli.json {
                write_json(out, &solution)?;
            } else {
                writeln!(
                    out,
                    "{}, {:?}",
                    solution.encoded_length, solution.version_bytes
                )?;
            }
            Ok(true)
        }
        Command::Verify {
            prefix,
            length,
            version_bytes,
        } => {
            let prefix = Prefix::new(prefix)?;
            let encoded_length = verify_version_bytes(&prefix, *length, version_bytes)?;
            if cli.json {
                write_json(
                    out,
                    &serde_json::json!({
                        "prefix": prefix,
                        "payload_length": length,
                        "version_bytes": version_bytes,
                        "valid": encoded_length.is_some(),
                        "encoded_length": encoded_length,
                    }),
                )?;
            } else {
                match encoded_length {
                    Some(len) => writeln!(
                        out,
                        "{} {:?} always encode as {} ({} characters)",
                        "✓".bright_green().bold(),
                        version_bytes,
                        format!("{}...", prefix).bright_white(),
                        len
                    )?,
                    None => writeln!(
                        out,
                        "{} {:?} do not always encode as {}",
                        "✗".red().bold(),
                        version_bytes,
                        format!("{}...", prefix).bright_white()
                    )?,
                }
            }
            Ok(encoded_length.is_some())
        }
        Command::Decode { word } => {
            let value = b58dec(word)?;
            let bytes = asciidec(&value);
            if cli.json {
                write_json(
                    out,
                    &serde_json::json!({
                        "word": word,
                        "value": value.to_string(),
                        "bytes": bytes,
                    }),
                )?;
            } else {
                writeln!(out, "{} {:?}", value, bytes)?;
            }
            Ok(true)
        }
        Command::Catalog => {
            let resolved = config.catalog()?.resolve(&config.search)?;
            if cli.json {
                write_json(out, &resolved)?;
            } else {
                writeln!(out, "{}", catalog_table(&resolved))?;
            }
            Ok(true)
        }
        Command::Identify { encoded } => {
            let found = config.catalog()?.identify(encoded, &config.search)?;
            if cli.json {
                write_json(out, &found)?;
            } else {
                match &found {
                    Some(id) => {
                        writeln!(
                            out,
                            "{} {}",
                            "📍".bright_cyan(),
                            id.name.bright_white().bold()
                        )?;
                        writeln!(out, "   prefix:        {}", id.prefix)?;
                        writeln!(out, "   version bytes: {:?}", id.version_bytes)?;
                        writeln!(out, "   payload:       {}", id.payload_hex)?;
                    }
                    None => writeln!(
                        out,
                        "{}",
                        "No catalog entry matches this string".yellow()
                    )?,
                }
            }
            Ok(found.is_some())
        }
    }
}

fn catalog_table(resolved: &[ResolvedEntry]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Prefix").add_attribute(Attribute::Bold),
            Cell::new("Payload").add_attribute(Attribute::Bold),
            Cell::new("Encoded").add_attribute(Attribute::Bold),
            Cell::new("Version bytes").add_attribute(Attribute::Bold),
            Cell::new("Valid range").add_attribute(Attribute::Bold),
        ]);

    for entry in resolved {
        let solution = &entry.solution;
        let version = if entry.pinned {
            format!("{:?} (pinned)", entry.version_bytes)
        } else {
            format!("{:?}", entry.version_bytes)
        };
        table.add_row(vec![
            Cell::new(&entry.name),
            Cell::new(solution.prefix.as_str()),
            Cell::new(solution.payload_length),
            Cell::new(solution.encoded_length),
            Cell::new(version),
            Cell::new(format!(
                "{} ..= {}",
                hex::encode(&solution.version_bytes),
                hex::encode(&solution.upper_version_bytes)
            )),
        ]);
    }
    table
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    writeln!(out, "{}", text)?;
    Ok(())
}
