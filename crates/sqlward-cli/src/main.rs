use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sqlward_core::{GatewayConfig, GatewayError};
use sqlward_gateway::SqlGateway;

/// SQLWard - extract and validate one read-only SQL statement from raw LLM output
#[derive(Parser)]
#[command(name = "sqlward")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raw text to process (reads stdin when omitted and --file is not set)
    text: Option<String>,

    /// Read raw text from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Path to config file (default: sqlward.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit the result as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Enable verbose output, including the forensic trace on rejection
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            std::process::exit(2);
        }
    };

    let raw = match read_input(&cli) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            std::process::exit(2);
        }
    };

    if cli.verbose {
        eprintln!("{} termination mode: {:?}", "Using".cyan(), config.termination);
        eprintln!("{} {} bytes of raw input", "Processing".cyan(), raw.len());
    }

    let gateway = SqlGateway::new(config);

    match gateway.extract(&raw) {
        Ok(statement) => {
            if cli.verbose {
                eprintln!("{}", "✓ Statement validated".green());
            }
            if cli.json {
                println!("{}", serde_json::json!({ "sql": statement }));
            } else {
                println!("{statement}");
            }
        }
        Err(err) => {
            report_rejection(&err, cli.json, cli.verbose);
            std::process::exit(1);
        }
    }
}

/// Resolve configuration: --config, else ./sqlward.toml, else defaults
fn load_config(cli: &Cli) -> Result<GatewayConfig> {
    if let Some(config_path) = &cli.config {
        GatewayConfig::from_file(config_path)
            .with_context(|| format!("failed to load config from {}", config_path.display()))
    } else if std::path::Path::new("sqlward.toml").exists() {
        GatewayConfig::from_file(std::path::Path::new("sqlward.toml"))
            .context("failed to load sqlward.toml")
    } else {
        if cli.verbose {
            eprintln!("{}", "No config file found, using defaults".yellow());
        }
        Ok(GatewayConfig::default())
    }
}

/// Read raw text from the argument, a file, or stdin
fn read_input(cli: &Cli) -> Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }

    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    Ok(buffer)
}

/// Print a rejection: structured JSON on stdout, or the generic message
/// (full trace with --verbose) on stderr
fn report_rejection(err: &GatewayError, json: bool, verbose: bool) {
    if json {
        println!(
            "{}",
            serde_json::json!({
                "code": err.code(),
                "message": err.kind.to_string(),
                "trace": err.trace,
            })
        );
        return;
    }

    if verbose {
        eprintln!("{}", "✗ Statement rejected".red().bold());
        eprintln!("{err}");
    } else {
        eprintln!("{}", err.public_message().red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
