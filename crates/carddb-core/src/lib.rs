//! carddb-core: Core library for building Cockatrice card databases from CSV
//!
//! This library provides functionality to:
//! - Find the CSV files in a folder and classify them by file name
//! - Read each file as header-driven records
//! - Map records onto Cockatrice card entries
//! - Assemble and serialize the `cards.xml` document

pub mod card;
pub mod category;
pub mod database;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod scanner;

pub use card::Card;
pub use category::{CardKind, Category};
pub use database::{CardDatabase, DATABASE_VERSION, OUTPUT_FILE_NAME};
pub use error::{Error, Result};
pub use pipeline::{add_cards_from_file, build_database};
pub use record::{Record, RecordReader};
pub use scanner::{find_csv_files, CsvFile, ScanResult, CSV_EXTENSION};
