//! Directory to card database conversion

use crate::card::Card;
use crate::database::CardDatabase;
use crate::error::Result;
use crate::record::RecordReader;
use crate::scanner::{find_csv_files, CsvFile};
use std::path::Path;
use tracing::{debug, info};

/// Convert every CSV file directly under `dir` into one card database.
///
/// Files are processed in scan order and rows in file order. The first
/// error aborts the whole conversion; no partial database is returned.
pub fn build_database<P: AsRef<Path>>(dir: P) -> Result<CardDatabase> {
    let scan = find_csv_files(dir)?;

    let listing: Vec<String> = scan
        .paths()
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    info!("Found CSV files: {}", listing.join(","));
    debug!(
        root = %scan.root.display(),
        "{} CSV file(s) to convert",
        scan.total_files()
    );

    let mut database = CardDatabase::new();
    for file in &scan.files {
        let added = add_cards_from_file(&mut database, file)?;
        debug!("{} card(s) from {}", added, file.path.display());
    }

    Ok(database)
}

/// Append one card per row of `file`, returning how many were added
pub fn add_cards_from_file(database: &mut CardDatabase, file: &CsvFile) -> Result<usize> {
    let reader = RecordReader::open(&file.path)?;
    info!("Reading file {}", file.path.display());
    debug!(
        category = %file.kind.category,
        spell = file.kind.spell,
        creature = file.kind.creature,
        columns = reader.headers().len(),
        "classified {}",
        file.path.display()
    );

    let mut added = 0;
    for record in reader {
        let record = record?;
        let card = Card::from_record(&record, file.kind)?;
        debug!(line = record.line(), "added card '{}'", card.name);
        database.push(card);
        added += 1;
    }

    Ok(added)
}
