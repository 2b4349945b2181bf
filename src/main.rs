use std::path::PathBuf;

use anyhow::Error;
use clap::Parser;
use strum::IntoEnumIterator;
use tracing::{info, instrument};

use crate::{
    configuration::{Config, load_configuration},
    generators::{generate_icon, structs::IconKind},
};

mod configuration;
mod generators;
mod logging;
mod utils;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML or JSON file with size, output directory and palette
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Edge length of the generated square icons
    #[arg(short, long, value_name = "PIXELS", value_parser = clap::value_parser!(u32).range(1..))]
    size: Option<u32>,

    /// Directory the PNGs are written to
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Only generate this icon
    #[arg(long, value_enum)]
    only: Option<IconKind>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

/// Writes every requested icon into the configured directory, in order.
#[instrument(skip(config), fields(size = config.size, output_dir = %config.output_dir.display()))]
fn generate_icons(config: &Config, kinds: &[IconKind]) -> Result<Vec<PathBuf>, Error> {
    utils::ensure_dir(&config.output_dir)?;

    let mut written = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let path = generate_icon(*kind, config.size, &config.output_dir, &config.palette)?;
        println!("Created: {}", path.display());
        written.push(path);
    }

    info!(count = written.len(), "icon generation finished");
    Ok(written)
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    let _log_guard = logging::init_logging(cli.debug)?;

    let config = load_configuration(cli.config.as_deref())?
        .with_overrides(cli.size, cli.output_dir.clone());
    config.validate()?;

    let kinds: Vec<IconKind> = match cli.only {
        Some(kind) => vec![kind],
        None => IconKind::iter().collect(),
    };

    println!("Wallet Icon Generator");
    println!("{}", "-".repeat(40));

    generate_icons(&config, &kinds)?;

    println!("{}", "-".repeat(40));
    println!("✓ Icons generated successfully!");
    println!("\nNext steps:");
    println!("1. Run: flutter pub get");
    println!("2. Run: flutter pub run flutter_launcher_icons:main");
    println!("3. Rebuild your app");

    Ok(())
}
