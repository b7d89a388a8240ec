use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dsa_patterns::document::{self, DocumentKind};
use dsa_patterns::{logging, DemoConfig};

/// Create and open documents through their creators.
#[derive(Parser, Debug)]
#[command(name = "factory_pattern")]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,

    /// Document kinds to open (word, pdf, excel); repeatable
    #[arg(long = "kind")]
    kinds: Vec<DocumentKind>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = DemoConfig::load_or_default(args.config.as_deref())
        .context("could not load configuration")?;
    let kinds = if args.kinds.is_empty() {
        config.documents.kinds
    } else {
        args.kinds
    };

    print!("{}", document::render_report(&kinds));
    Ok(())
}
