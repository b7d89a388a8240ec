use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dsa_patterns::{forecast, logging, DemoConfig};

/// Forecast compound growth with plain and memoized recursion.
#[derive(Parser, Debug)]
#[command(name = "financial_forecast")]
struct Args {
    /// TOML config file; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of years to forecast
    #[arg(long)]
    years: Option<u32>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut config = DemoConfig::load_or_default(args.config.as_deref())
        .context("could not load configuration")?;
    if let Some(years) = args.years {
        config.forecast.years = years;
    }
    let params = config
        .forecast
        .params()
        .context("invalid forecast parameters")?;

    print!("{}", forecast::render_report(&params, &config.forecast.currency));
    Ok(())
}
