// File: crates/demo/src/main.rs
// Summary: `dragchart` entry point: mount a chart, optionally replay a gesture script, write SVG (and PNG).

mod cli;
mod data;
mod script;

use std::path::Path;

use anyhow::{Context, Result};
use chart_core::Chart;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{ChartArgs, Cli, Command};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Render(args) => {
            let chart = mount(&args)?;
            write_outputs(&chart, &args)
        }
        Command::Replay { script, chart: args } => {
            let steps = script::load_script(&script)?;
            let mut chart = mount(&args)?;
            let summary = script::replay(&mut chart, &steps);
            info!(
                steps = summary.steps,
                redraws = summary.redraws,
                elapsed_ms = summary.elapsed.as_millis() as u64,
                "script {} replayed",
                script.display()
            );
            for line in chart.readout().lines() {
                println!("{line}");
            }
            write_outputs(&chart, &args)
        }
    }
}

fn mount(args: &ChartArgs) -> Result<Chart> {
    let cfg = args.chart_config()?;
    let chart = match &args.data {
        // the file decides the shape
        Some(path) => Chart::new(cfg, data::load_values_csv(path)?, args.viewport)?,
        None => Chart::with_random_data(cfg, args.viewport)?,
    };
    Ok(chart)
}

fn write_outputs(chart: &Chart, args: &ChartArgs) -> Result<()> {
    write_svg(chart, &args.out)?;
    if let Some(png) = &args.png {
        write_png(chart, png)?;
    }
    Ok(())
}

fn write_svg(chart: &Chart, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let svg = chart.to_svg();
    std::fs::write(path, &svg).with_context(|| format!("writing {}", path.display()))?;
    info!(bytes = svg.len(), "wrote {}", path.display());
    Ok(())
}

#[cfg(feature = "png")]
fn write_png(chart: &Chart, path: &Path) -> Result<()> {
    chart_render_skia::SkiaRenderer::new().render_to_png(chart.scene(), path)?;
    info!("wrote {}", path.display());
    Ok(())
}

#[cfg(not(feature = "png"))]
fn write_png(_chart: &Chart, path: &Path) -> Result<()> {
    anyhow::bail!("cannot write {}: dragchart was built without the `png` feature", path.display())
}
