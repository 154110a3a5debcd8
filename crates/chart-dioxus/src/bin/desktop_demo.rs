// File: crates/chart-dioxus/src/bin/desktop_demo.rs
// Purpose: Launcher for the Dioxus desktop chart, draggable or brushable.

use std::path::PathBuf;

use chart_core::ChartConfig;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "desktop_demo", about = "Interactive draggable line chart")]
struct Args {
    /// JSON5 chart configuration; overrides the variant defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start from the brush/zoom variant.
    #[arg(long)]
    brush: bool,

    /// Number of series (1..=3).
    #[arg(long)]
    series: Option<usize>,

    /// Seed for the initial random values.
    #[arg(long)]
    seed: Option<u64>,
}

fn load_config(args: &Args) -> Result<ChartConfig, String> {
    let mut cfg = match &args.config {
        Some(path) => ChartConfig::load_from_file(path).map_err(|e| e.to_string())?,
        None if args.brush => ChartConfig::brushable(),
        None => ChartConfig::default(),
    };
    if let Some(series) = args.series {
        cfg.series_count = series;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    Ok(cfg)
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let result = load_config(&args).and_then(chart_dioxus::run_demo_ui);
    if let Err(e) = result {
        eprintln!("chart-dioxus demo error: {e}");
        std::process::exit(1);
    }
}
