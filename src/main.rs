use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rptlog::{db, loader};

#[derive(Parser, Debug)]
#[command(
    name = "rptlog",
    about = "Load a trip log JSON document into a SQLite database."
)]
struct Args {
    /// Input JSON document
    #[arg(default_value = "./rptlog.json")]
    file: PathBuf,
    /// Output database file (recreated on every run)
    #[arg(long = "database-path", default_value = "./rptlog.db")]
    database_path: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let file = File::open(&args.file)
        .with_context(|| format!("failed to open input document {}", args.file.display()))?;
    let document: serde_json::Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", args.file.display()))?;

    let mut conn = db::establish(&args.database_path)?;

    let summary = loader::load(&document, &mut conn)?;
    info!(
        "Loaded {} trips, {} airports, {} aircraft types, {} aircraft, {} flights into {}",
        summary.trips,
        summary.airports,
        summary.aircraft_types,
        summary.aircraft,
        summary.flights,
        args.database_path.display()
    );

    Ok(())
}
