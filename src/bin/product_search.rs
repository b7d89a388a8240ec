use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dsa_patterns::search::{self, ProductId};
use dsa_patterns::{logging, DemoConfig};

/// Compare linear and binary search over the product catalog.
#[derive(Parser, Debug)]
#[command(name = "product_search")]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,

    /// Product ID to look up; read from stdin when omitted
    #[arg(long, allow_negative_numbers = true)]
    id: Option<ProductId>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = DemoConfig::load_or_default(args.config.as_deref())
        .context("could not load configuration")?;
    let catalog = config.catalog.catalog();

    let id = match args.id {
        Some(id) => id,
        // The prompt goes to stderr so stdout carries only the report.
        None => search::read_product_id(io::stdin().lock(), io::stderr())
            .context("could not read product ID")?,
    };
    let report = catalog.search(id);

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render());
    }
    Ok(())
}
