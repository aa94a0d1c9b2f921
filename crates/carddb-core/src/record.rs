//! Header-driven CSV reader yielding one record per row

use crate::error::{Error, Result};
use csv::StringRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// One row of a CSV file, addressed by header name
#[derive(Debug, Clone)]
pub struct Record {
    headers: StringRecord,
    values: StringRecord,
    source_path: PathBuf,
    line: u64,
}

impl Record {
    /// Look up a field by column name.
    ///
    /// If the header repeats a name, the rightmost column wins.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, h)| *h == field)
            .last()
            .and_then(|(i, _)| self.values.get(i))
    }

    /// Look up a field the card mapping cannot do without
    pub fn require(&self, field: &str) -> Result<&str> {
        self.get(field).ok_or_else(|| Error::MissingField {
            field: field.to_string(),
            path: self.source_path.clone(),
            line: self.line,
        })
    }

    /// 1-based line number of the row in its file
    pub fn line(&self) -> u64 {
        self.line
    }
}

/// Streaming reader over the rows of one CSV file.
///
/// The header line is read on construction. Iterating yields each data row
/// in file order; a row with a different number of fields than the header
/// is an error.
pub struct RecordReader<R> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    source_path: PathBuf,
}

impl RecordReader<BufReader<File>> {
    /// Open a CSV file for reading
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_reader(BufReader::new(file), path)
    }
}

impl<R: Read> RecordReader<R> {
    /// Read CSV from any reader; `source` labels errors and records
    pub fn from_reader(reader: R, source: impl Into<PathBuf>) -> Result<Self> {
        let source_path = source.into();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| Error::Csv {
                path: source_path.clone(),
                source: e,
            })?
            .clone();

        Ok(Self {
            reader,
            headers,
            source_path,
        })
    }

    /// Column names from the header line
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut values = StringRecord::new();
        match self.reader.read_record(&mut values) {
            Ok(true) => {
                let line = values.position().map(|p| p.line()).unwrap_or(0);
                Some(Ok(Record {
                    headers: self.headers.clone(),
                    values,
                    source_path: self.source_path.clone(),
                    line,
                }))
            }
            Ok(false) => None,
            Err(e) => Some(Err(Error::Csv {
                path: self.source_path.clone(),
                source: e,
            })),
        }
    }
}

/// Parse CSV from a string (useful for testing)
pub fn read_records_str(content: &str, source_name: &str) -> Result<Vec<Record>> {
    RecordReader::from_reader(content.as_bytes(), source_name)?.collect()
}
