// File: crates/demo/src/cli.rs
// Summary: Command-line surface (clap derive) and config assembly from flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{ChartConfig, Viewport};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "dragchart", version, about = "Draggable line chart, rendered headlessly")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Mount a chart and write it out unchanged.
    Render(ChartArgs),
    /// Drive a chart with a JSON5 gesture script, print the readout and write the result.
    Replay {
        /// JSON5 list of steps (down/move/up/wait/context_menu/resize).
        #[arg(long)]
        script: PathBuf,
        #[command(flatten)]
        chart: ChartArgs,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    #[default]
    Draggable,
    Brushable,
}

#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    /// JSON5 chart configuration; replaces the variant preset.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Variant::Draggable)]
    pub variant: Variant,

    /// Number of series (1..=3).
    #[arg(long)]
    pub series: Option<usize>,

    /// Seed for the random initial values.
    #[arg(long)]
    pub seed: Option<u64>,

    /// CSV with one row of values per series, used instead of random values.
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Viewport size the svg is derived from.
    #[arg(long, default_value = "1280x800", value_parser = parse_viewport)]
    pub viewport: Viewport,

    /// SVG output path.
    #[arg(long, default_value = "target/out/dragchart.svg")]
    pub out: PathBuf,

    /// Also rasterise to this PNG path (needs the `png` feature).
    #[arg(long)]
    pub png: Option<PathBuf>,
}

impl ChartArgs {
    pub fn chart_config(&self) -> Result<ChartConfig> {
        let mut cfg = match &self.config {
            Some(path) => load_config(path)?,
            None => match self.variant {
                Variant::Draggable => ChartConfig::default(),
                Variant::Brushable => ChartConfig::brushable(),
            },
        };
        if let Some(series) = self.series {
            cfg.series_count = series;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn load_config(path: &Path) -> Result<ChartConfig> {
    ChartConfig::load_from_file(path).with_context(|| format!("loading config {}", path.display()))
}

/// Parse `WIDTHxHEIGHT`, e.g. `1280x800`.
pub fn parse_viewport(s: &str) -> Result<Viewport, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let parse = |v: &str| -> Result<f64, String> {
        let n = v.trim().parse::<f64>().map_err(|e| format!("bad dimension '{v}': {e}"))?;
        if n.is_finite() && n >= 0.0 { Ok(n) } else { Err(format!("dimension must be non-negative, got {n}")) }
    };
    Ok(Viewport::new(parse(w)?, parse(h)?))
}
