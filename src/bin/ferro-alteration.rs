// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-alteration CLI
//!
//! Command-line interface for parsing protein change notation.

use clap::{Parser, Subcommand};
use ferro_alteration::annotate::{annotate_protein_change, AnnotateConfig};
use ferro_alteration::cli::{
    output_annotation, output_error_with_context, protein_change_lines, OutputFormat,
};
use ferro_alteration::config::FerroConfig;
use ferro_alteration::Grammar;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ferro-alteration")]
#[command(author, version, about = "Protein change parser and consequence classifier")]
#[command(long_about = "Parse short protein change notation and classify its consequence.

Examples:
  ferro-alteration parse V600E
  ferro-alteration parse -f json 'p.V600 {excluding V600E}'
  ferro-alteration parse -i alterations.txt
  echo 'L747_T751delinsP' | ferro-alteration parse
  ferro-alteration grammars")]
struct Cli {
    /// Configuration file (default: .ferro.toml, then ~/.config/ferro/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Do not strip a leading 'p.' prefix
    #[arg(long, global = true)]
    no_strip_prefix: bool,

    /// Do not fall back to categorical alterations such as 'Truncating Mutations'
    #[arg(long, global = true)]
    no_categorical: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse protein changes
    Parse {
        /// Protein change (e.g., V600E); reads --input or stdin when absent
        variant: Option<String>,

        /// Input file (one protein change per line)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// List the grammars in the order they are tried
    Grammars,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let file_config = match &cli.config {
        Some(path) => FerroConfig::load_from_path(path)?,
        None => FerroConfig::load().unwrap_or_default(),
    };
    let config = file_config.merge_with_cli(cli.no_strip_prefix, cli.no_categorical);

    match cli.command {
        Commands::Parse {
            variant,
            input,
            format,
        } => {
            let format: OutputFormat = format.parse()?;
            let failures = run_parse(variant.as_deref(), input.as_ref(), format, &config)?;
            if failures > 0 {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Grammars => run_grammars(),
    }
}

fn init_tracing(verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| format!("Invalid log level '{}': {}", level, e))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
    Ok(())
}

/// Parse one protein change, a file, or stdin. Returns the number of inputs
/// that failed (unparseable or an error status).
fn run_parse(
    variant: Option<&str>,
    input: Option<&PathBuf>,
    format: OutputFormat,
    config: &AnnotateConfig,
) -> Result<usize, Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let mut failures = 0usize;

    if let Some(v) = variant {
        if !process(v, None, format, config, &mut writer)? {
            failures += 1;
        }
        return Ok(failures);
    }

    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut total = 0usize;
    for line in protein_change_lines(reader) {
        let line = line?;
        total += 1;
        let line_number = Some(line.line_number);
        if !process(&line.protein_change, line_number, format, config, &mut writer)? {
            failures += 1;
        }
    }
    writer.flush()?;
    tracing::info!("Parsed {} protein changes, {} failed", total, failures);

    Ok(failures)
}

/// Annotate and write a single protein change; `false` when it failed.
fn process<W: Write>(
    protein_change: &str,
    line_number: Option<usize>,
    format: OutputFormat,
    config: &AnnotateConfig,
    writer: &mut W,
) -> io::Result<bool> {
    match annotate_protein_change(protein_change, config) {
        Ok(annotated) => {
            output_annotation(writer, &annotated, format)?;
            Ok(!annotated.status.is_error())
        }
        Err(e) => {
            match format {
                OutputFormat::Json => {
                    output_error_with_context(writer, protein_change, &e, format, line_number)?
                }
                OutputFormat::Text => output_error_with_context(
                    &mut io::stderr(),
                    protein_change,
                    &e,
                    format,
                    line_number,
                )?,
            }
            Ok(false)
        }
    }
}

fn run_grammars() -> Result<(), Box<dyn std::error::Error>> {
    for (i, grammar) in Grammar::DISPATCH_ORDER.iter().enumerate() {
        println!("{}. {}", i + 1, grammar);
    }
    Ok(())
}
