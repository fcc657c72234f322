use anyhow::Result;
use clap::Parser;

use std::path::PathBuf;

use gist::analyzer::{AnalysisReport, analyze_url};
use gist::config::Config;
use gist::models::ModelSet;

/// Analyze one web article: short summary, sentiment verdict with per-chunk
/// breakdown, and the most frequent named entities.
#[derive(Parser)]
#[command(name = "gist", version)]
struct Cli {
    /// Article URL to analyze
    url: String,

    /// Write the full JSON record to this file
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let models = ModelSet::hosted(config.inference_api_url(), config.inference_api_token());
    let limits = config.limits();

    match analyze_url(&cli.url, &models, &limits).await {
        Ok(report) => {
            print_report(&report);
            if let Some(path) = cli.output {
                std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;
                println!("\nSaved full record to {}", path.display());
            }
            Ok(())
        }
        Err(err) if err.is_recoverable() => {
            eprintln!("Could not extract or analyze the article: {err}");
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

fn print_report(report: &AnalysisReport) {
    println!("Summary");
    println!("  {}", report.summary);

    println!();
    println!("Overall sentiment: {}", report.overall_sentiment.as_str());
    for (label, count) in &report.sentiment_counts {
        println!("  {:<8} {count} chunk(s)", label.as_str());
    }

    println!();
    println!("Top entities");
    if report.top_entities.is_empty() {
        println!("  (none recognized)");
    }
    for (word, count) in &report.top_entities {
        println!("  {word}: {count} time(s)");
    }
}
