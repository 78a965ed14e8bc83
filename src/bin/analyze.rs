use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use seo_audit::{Analyzer, config::Config, telemetry};

/// Fetch a page and its robots.txt, then print the SEO report as JSON.
#[derive(Debug, Parser)]
#[command(name = "seo-analyze", version, about)]
struct Args {
    /// Absolute http(s) URL of the page to analyze.
    url: String,

    /// Per-request timeout in seconds for the page and robots.txt fetches.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing("warn");
    let args = Args::parse();

    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(secs) = args.timeout_secs {
        anyhow::ensure!(secs > 0, "--timeout-secs must be greater than zero");
        config = config.with_fetch_timeout(Duration::from_secs(secs));
    }

    let analyzer = Analyzer::from_config(&config).context("failed to build http client")?;
    let report = analyzer.analyze(&args.url).await?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    Ok(())
}
