use anyhow::Context;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use dose_levels::config::Config;
use dose_levels::output::save_results;
use dose_levels::simulate;

#[derive(Parser)]
#[command(name = "dose_levels")]
#[command(about = "Aggregate drug level simulation for dosing regimens")]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: PathBuf,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Override the window start (hours)
    #[arg(long, allow_negative_numbers = true)]
    min_time: Option<f64>,

    /// Override the window end (hours)
    #[arg(long, allow_negative_numbers = true)]
    max_time: Option<f64>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let config = Config::from_file(&cli.config)
        .with_context(|| format!("failed to load configuration from {:?}", cli.config))?
        .with_bounds(cli.min_time, cli.max_time)
        .context("invalid time window")?;
    info!("Loaded configuration from {:?}", cli.config);

    let regimens = config.regimens()?;
    let window = config.window()?;
    info!(
        "Simulating {} regimens over [{}, {}] h",
        regimens.len(),
        window.min_time(),
        window.max_time()
    );

    let result = simulate(&regimens, &window);
    info!("Simulation completed for {} drugs", result.len());

    std::fs::create_dir_all(&cli.output)
        .with_context(|| format!("failed to create output directory {:?}", cli.output))?;

    save_results(&result, &window, &cli.output)?;
    info!("Results saved to {:?}", cli.output);

    Ok(())
}
