//! carddb CLI
//!
//! Generates a Cockatrice `cards.xml` from a folder of CSV files.

use carddb_core::{build_database, OUTPUT_FILE_NAME};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "carddb")]
#[command(about = "Generates a Cockatrice cards.xml from CSV files", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to folder containing CSV files
    csv_path: PathBuf,

    /// Log every card as it is added
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_level(verbose)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: could not install logger: {}", e);
    }
}

fn run(cli: &Cli) -> carddb_core::Result<()> {
    convert(&cli.csv_path, Path::new(OUTPUT_FILE_NAME))
}

/// Convert `csv_path` and write the database to `output`.
///
/// Nothing is written unless every file converted cleanly.
fn convert(csv_path: &Path, output: &Path) -> carddb_core::Result<()> {
    let database = build_database(csv_path)?;

    database.save(output)?;
    info!("Wrote {} cards to {}", database.len(), output.display());

    Ok(())
}
