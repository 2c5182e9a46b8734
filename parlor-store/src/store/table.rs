//! Flat CSV table plumbing
//!
//! Each table is a header-first, comma-separated file. Writers append one
//! record at a time; readers stream the whole table in file order, skipping
//! rows that do not parse into the expected column count.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

/// One durable table: a path plus its fixed column header
pub(crate) struct Table {
    path: PathBuf,
    header: &'static [&'static str],
}

impl Table {
    pub(crate) fn new(path: PathBuf, header: &'static [&'static str]) -> Self {
        Self { path, header }
    }

    /// Create the table file with just the header row if it does not exist
    ///
    /// Also creates the parent directory. Existing tables are left untouched.
    pub(crate) fn create_if_missing(&self) -> io::Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(self.header).map_err(csv_to_io)?;
        writer.flush()?;
        Ok(())
    }

    /// Append a single record
    ///
    /// Fields containing commas, quotes, or newlines are quoted by the
    /// writer, so any string round-trips through the table unchanged.
    pub(crate) fn append(&self, fields: &[&str]) -> io::Result<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(fields).map_err(csv_to_io)?;
        writer.flush()?;
        Ok(())
    }

    /// Read every data row in file order
    ///
    /// The header row is skipped. Rows with the wrong column count and rows
    /// that fail to parse are skipped and reported on stderr; they never
    /// abort the read.
    pub(crate) fn read_rows(&self) -> io::Result<Vec<StringRecord>> {
        let file = File::open(&self.path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let mut rows = Vec::new();
        for result in reader.records() {
            match result {
                Ok(record) if record.len() == self.header.len() => rows.push(record),
                Ok(record) => {
                    eprintln!(
                        "Skipping malformed row in {}: expected {} columns, found {}",
                        self.path.display(),
                        self.header.len(),
                        record.len()
                    );
                }
                Err(e) => {
                    eprintln!("Skipping unreadable row in {}: {}", self.path.display(), e);
                }
            }
        }
        Ok(rows)
    }
}

/// Map a csv error into io::Error for uniform handling upstream
fn csv_to_io(err: csv::Error) -> io::Error {
    io::Error::other(err.to_string())
}
