//! hishq CLI — fetch historical quotes, print the range summary, and
//! optionally export CSV or chart-series JSON.

use anyhow::{Context, Result};
use chrono::{Duration, Local};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use hishq_core::{
    chart_series_head, csv_filename, fetch_history, to_csv, ClientConfig, Interval, QuoteRequest,
    Session, SohuHisHq,
};

#[derive(Parser)]
#[command(name = "hishq", about = "hishq CLI — historical quote fetcher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a ticker's history and print the range summary and rows.
    Fetch {
        /// Provider ticker code (e.g. cn_600919).
        ticker: String,

        /// Start date (YYYYMMDD). Defaults to one year ago.
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYYMMDD). Defaults to today.
        #[arg(long)]
        end: Option<String>,

        /// Sampling interval: daily, weekly, or monthly.
        #[arg(long, default_value = "daily")]
        interval: String,

        /// Write the CSV export here ("-" picks the provider-style name).
        #[arg(long)]
        csv: Option<String>,

        /// Print the chart series as JSON instead of the row table.
        #[arg(long, default_value_t = false)]
        chart: bool,

        /// Cap on displayed rows and chart points.
        #[arg(long, default_value_t = 50)]
        limit: usize,

        /// Request timeout in seconds (overrides config).
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Extra attempts after a failed request (overrides config).
        #[arg(long)]
        retries: Option<u32>,

        /// Path to a TOML client config file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            ticker,
            start,
            end,
            interval,
            csv,
            chart,
            limit,
            timeout_secs,
            retries,
            config,
        } => run_fetch(
            ticker,
            start,
            end,
            &interval,
            csv,
            chart,
            limit,
            timeout_secs,
            retries,
            config,
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_fetch(
    ticker: String,
    start: Option<String>,
    end: Option<String>,
    interval: &str,
    csv: Option<String>,
    chart: bool,
    limit: usize,
    timeout_secs: Option<u64>,
    retries: Option<u32>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ClientConfig::default(),
    };
    if let Some(secs) = timeout_secs {
        config.timeout_secs = secs;
    }
    if let Some(extra) = retries {
        config.max_retries = extra;
    }

    let today = Local::now().date_naive();
    let start = start.unwrap_or_else(|| (today - Duration::days(365)).format("%Y%m%d").to_string());
    let end = end.unwrap_or_else(|| today.format("%Y%m%d").to_string());

    let interval: Interval = interval.parse()?;
    let req = QuoteRequest::new(ticker, start, end, interval)?;

    let provider = SohuHisHq::with_config(config);
    let session = Session::new();
    let data = fetch_history(&provider, &session, &req)
        .with_context(|| format!("fetching {}", req.ticker()))?;

    println!(
        "{} {} {}..{}: {} rows",
        req.ticker(),
        req.interval(),
        req.start(),
        req.end(),
        data.history.len()
    );

    let s = &data.summary;
    if !s.is_empty() {
        println!("period:         {}", s.period);
        println!("change:         {} ({})", s.change_amount, s.change_percent);
        println!("low/high:       {} / {}", s.lowest, s.highest);
        println!("volume/amount:  {} / {}", s.total_volume, s.total_amount);
        println!("turnover rate:  {}", s.turnover_rate);
    }

    if chart {
        let series = chart_series_head(&data.history, limit);
        println!("{}", serde_json::to_string_pretty(&series)?);
    } else if !data.history.is_empty() {
        println!();
        println!(
            "{:<10} {:>10} {:>10} {:>10} {:>10} {:>12}",
            "date", "open", "close", "low", "high", "volume"
        );
        for (date, row) in data.history.iter().take(limit) {
            println!(
                "{:<10} {:>10} {:>10} {:>10} {:>10} {:>12}",
                date, row.open, row.close, row.low, row.high, row.volume
            );
        }
        if data.history.len() > limit {
            println!("... {} more rows", data.history.len() - limit);
        }
    }

    if let Some(path) = csv {
        let path = if path == "-" {
            csv_filename(req.ticker())
        } else {
            path
        };
        let rendered = to_csv(&data.history)?;
        fs::write(&path, rendered).with_context(|| format!("writing {path}"))?;
        println!("wrote {path}");
    }

    Ok(())
}
