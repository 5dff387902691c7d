use crate::file::csv::error::FileError;
use std::path::Path;
use tracing::debug;

/// Field delimiter of the accepted wire format.
pub const FIELD_DELIMITER: char = ';';

/// A raw delimited file split into a header and body rows.
///
/// There is no quoting or escaping support: a delimiter inside a value is
/// indistinguishable from a field boundary. Field counts per row are not
/// reconciled against the header here; association happens downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    /// Logical column names, in file order.
    pub header: Vec<String>,
    /// Every line after the header, split on the delimiter. Blank lines
    /// are retained and skipped by [`CsvTable::data_rows`].
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Reads the whole file into memory once and parses it. The file
    /// handle is released before parsing starts.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FileError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FileError::NotFound(path.display().to_string()));
        }
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Splits raw text into the header line and data rows.
    pub fn parse(text: &str) -> Result<Self, FileError> {
        let mut lines = text.lines();
        let header_line = lines
            .next()
            .ok_or_else(|| FileError::InvalidFormat("missing header line".to_string()))?;

        let header = split_line(header_line);
        let rows: Vec<Vec<String>> = lines.map(split_line).collect();

        debug!(
            columns = header.len(),
            rows = rows.len(),
            "parsed delimited file"
        );
        Ok(CsvTable { header, rows })
    }

    /// Body rows that carry data; blank lines contribute nothing.
    pub fn data_rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows
            .iter()
            .filter(|row| !is_blank(row))
            .map(|row| row.as_slice())
    }
}

fn split_line(line: &str) -> Vec<String> {
    line.split(FIELD_DELIMITER).map(str::to_string).collect()
}

/// A blank line splits into a single whitespace-only field.
fn is_blank(row: &[String]) -> bool {
    matches!(row, [only] if only.trim().is_empty())
}
