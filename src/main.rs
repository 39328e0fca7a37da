#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::Parser;
use gilded_rose::{reader, report, update_items};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const AFTER_HELP: &str = "\
INPUT FILE FORMAT:
    One inventory item per line: ITEM NAME SELLIN QUALITY
    E.g.: \"Aged Brie 1 1\"

OUTPUT:
    The updated values are written to stdout.

LOGGING:
    GILDED_ROSE_LOG         tracing filter (default: warn)
    GILDED_ROSE_LOG_FORMAT  compact | json (default: compact)";

#[derive(Parser, Debug)]
#[command(
    name = "gildedrose",
    version,
    about = "Performs one daily update of Gilded Rose inventory",
    long_about = "Given an input file, performs one daily update of inventory management. \
                  SellIn and Quality values for listed items are updated according to the \
                  inventory management rules.",
    after_help = AFTER_HELP
)]
struct Cli {
    /// Inventory file to update.
    input: PathBuf,
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("GILDED_ROSE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let format = env::var("GILDED_ROSE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);
    match format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
            .init(),
        _ => registry
            .with(fmt::layer().compact().with_writer(io::stderr))
            .init(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    if !cli.input.is_file() {
        bail!("Invalid input file path: {}", cli.input.display());
    }

    let mut goods = reader::read_goods(&cli.input)?;
    update_items(&mut goods);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &goods).context("failed to write report")?;
    out.flush().context("failed to flush report")?;

    Ok(())
}
