//! Directory scanner for discovering card CSV files

use crate::category::CardKind;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extension of card definition files
pub const CSV_EXTENSION: &str = "csv";

/// A discovered CSV file
#[derive(Debug, Clone)]
pub struct CsvFile {
    /// Full path to the file
    pub path: PathBuf,
    /// Card rules selected by the file name
    pub kind: CardKind,
}

/// Result of scanning a directory
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Directory that was scanned
    pub root: PathBuf,
    /// Discovered files, sorted by file name
    pub files: Vec<CsvFile>,
}

impl ScanResult {
    /// Number of files found
    pub fn total_files(&self) -> usize {
        self.files.len()
    }

    /// Get all file paths
    pub fn paths(&self) -> Vec<&Path> {
        self.files.iter().map(|f| f.path.as_path()).collect()
    }
}

/// Find the CSV files that are direct children of `root`.
///
/// Subdirectories are not descended into. A symlink counts when it resolves
/// to a regular file; dangling or looping links are skipped.
pub fn find_csv_files<P: AsRef<Path>>(root: P) -> Result<ScanResult> {
    let root = root.as_ref();

    let metadata = fs::metadata(root).map_err(|e| Error::DirectoryRead {
        path: root.to_path_buf(),
        source: e,
    })?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !has_csv_extension(file_name) || !is_regular_file(path) {
            continue;
        }

        files.push(CsvFile {
            path: path.to_path_buf(),
            kind: CardKind::from_file_name(file_name),
        });
    }

    Ok(ScanResult {
        root: root.to_path_buf(),
        files,
    })
}

/// Whether a file name ends with `.csv`
fn has_csv_extension(file_name: &str) -> bool {
    file_name
        .strip_suffix(CSV_EXTENSION)
        .is_some_and(|stem| stem.ends_with('.'))
}

/// Follows symlinks; anything that cannot be stat'ed is not a file
fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_file())
}
