use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rapid_summarizer::request::{handle_json, ErrorResponse};
use rapid_summarizer::{SummarizationMethod, Summarizer, SummarizerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rapid-summarizer")]
#[command(about = "Extractive text summarization by sentence scoring", long_about = None)]
struct Cli {
    /// Input file; reads stdin when absent or "-".
    input: Option<PathBuf>,

    /// Fraction of sentences to keep, in (0, 1].
    #[arg(long, allow_negative_numbers = true)]
    ratio: Option<f64>,

    /// Scoring strategy. Allowed: extractive, frequency
    #[arg(long)]
    method: Option<String>,

    /// JSON file with a `{"ratio": .., "method": ..}` config; flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Treat input as a JSON request body and print a JSON response.
    /// The body carries its own ratio and method.
    #[arg(long, conflicts_with_all = ["ratio", "method", "config"])]
    json: bool,
}

fn read_input(path: Option<&PathBuf>) -> rapid_summarizer::Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => Ok(std::fs::read_to_string(p)?),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn input_name(path: Option<&PathBuf>) -> String {
    match path {
        Some(p) if p.as_os_str() != "-" => p.display().to_string(),
        _ => "stdin".to_string(),
    }
}

fn load_config(cli: &Cli) -> Result<SummarizerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => SummarizerConfig::default(),
    };
    if let Some(ratio) = cli.ratio {
        config = config.with_ratio(ratio);
    }
    if let Some(method) = &cli.method {
        config = config.with_method(method.parse::<SummarizationMethod>()?);
    }
    Ok(config)
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let input = read_input(cli.input.as_ref())
        .with_context(|| format!("failed to read {}", input_name(cli.input.as_ref())))?;

    if cli.json {
        return match handle_json(&input) {
            Ok(response) => {
                println!("{}", serde_json::to_string(&response)?);
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => {
                tracing::warn!(kind = err.kind(), "request rejected: {err}");
                println!("{}", serde_json::to_string(&ErrorResponse::from(&err))?);
                Ok(ExitCode::from(if err.is_client_error() { 2 } else { 1 }))
            }
        };
    }

    let config = load_config(&cli)?;
    if !(config.ratio > 0.0 && config.ratio <= 1.0) {
        tracing::warn!(ratio = config.ratio, "ratio outside (0, 1]");
    }

    let summary = Summarizer::new(config).summarize(&input);
    if summary.is_empty() {
        tracing::info!("no sentences found in input");
    }
    println!("{summary}");
    Ok(ExitCode::SUCCESS)
}
