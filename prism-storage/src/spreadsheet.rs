//! Spreadsheet-backed record source
//!
//! The file is read in full on every lookup. CSV files go through the `csv`
//! reader; Excel and OpenDocument workbooks through `calamine`, first sheet
//! only.

use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader};
use prism_core::{CustomerRecord, StorageError, StorageResult};

use crate::table::Table;
use crate::RecordSource;

/// On-disk format of the backing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Workbook,
}

impl SourceFormat {
    /// Pick a format from the file extension.
    pub fn from_path(path: &Path) -> StorageResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(SourceFormat::Workbook),
            _ => Err(StorageError::UnsupportedFormat { extension }),
        }
    }
}

/// Record source reading a spreadsheet file from disk.
#[derive(Debug, Clone)]
pub struct SpreadsheetSource {
    path: PathBuf,
    format: SourceFormat,
}

impl SpreadsheetSource {
    /// Bind to `path`. The file itself is not opened until the first lookup.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let format = SourceFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    /// Read the whole file into a [`Table`].
    pub fn load_table(&self) -> StorageResult<Table> {
        let table = match self.format {
            SourceFormat::Csv => read_csv(&self.path)?,
            SourceFormat::Workbook => read_workbook(&self.path)?,
        };
        tracing::debug!(path = %self.path.display(), rows = table.len(), "Loaded customer table");
        Ok(table)
    }
}

impl RecordSource for SpreadsheetSource {
    fn find_record(&self, msisdn: &str) -> StorageResult<Option<CustomerRecord>> {
        self.load_table()?.find_record(msisdn)
    }

    fn check_available(&self) -> StorageResult<()> {
        if !self.path.is_file() {
            return Err(source_unavailable(&self.path, "file not found"));
        }
        self.load_table()?.column_map().map(|_| ())
    }

    fn describe(&self) -> String {
        format!("spreadsheet:{}", self.path.display())
    }
}

// ============================================================================
// READERS
// ============================================================================

fn source_unavailable(path: &Path, reason: impl ToString) -> StorageError {
    StorageError::SourceUnavailable {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

fn csv_error(path: &Path, err: csv::Error) -> StorageError {
    if err.is_io_error() {
        return source_unavailable(path, err);
    }
    let row = err.position().map(|p| p.line() as usize).unwrap_or(0);
    StorageError::Malformed {
        row,
        reason: err.to_string(),
    }
}

fn read_csv(path: &Path) -> StorageResult<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(path, e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| csv_error(path, e))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::new(headers, rows))
}

fn read_workbook(path: &Path) -> StorageResult<Table> {
    let mut workbook = open_workbook_auto(path).map_err(|e| source_unavailable(path, e))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| StorageError::Malformed {
            row: 0,
            reason: "workbook contains no sheets".to_string(),
        })?
        .map_err(|e| source_unavailable(path, e))?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<String>>());
    let headers = rows.next().unwrap_or_default();

    Ok(Table::new(headers, rows.collect()))
}

/// Render a workbook cell the way it would appear in a CSV export.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => (*f as i64).to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            SourceFormat::from_path(Path::new("data/customers.CSV")),
            Ok(SourceFormat::Csv)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("customers.xlsx")),
            Ok(SourceFormat::Workbook)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("customers.json")),
            Err(StorageError::UnsupportedFormat {
                extension: "json".to_string()
            })
        );
        assert!(SourceFormat::from_path(Path::new("customers")).is_err());
    }

    #[test]
    fn test_cell_to_string_numbers() {
        assert_eq!(cell_to_string(&Data::Float(650000000.0)), "650000000");
        assert_eq!(cell_to_string(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_to_string(&Data::Int(1)), "1");
        assert_eq!(cell_to_string(&Data::Bool(true)), "true");
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String(" yes ".to_string())), "yes");
    }

    #[test]
    fn test_missing_file_is_unavailable() -> StorageResult<()> {
        let source = SpreadsheetSource::open("does/not/exist.csv")?;
        assert!(matches!(
            source.find_record("650000000"),
            Err(StorageError::SourceUnavailable { .. })
        ));
        assert!(matches!(
            source.check_available(),
            Err(StorageError::SourceUnavailable { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_missing_workbook_is_unavailable() -> StorageResult<()> {
        let source = SpreadsheetSource::open("does/not/exist.xlsx")?;
        assert!(matches!(
            source.find_record("650000000"),
            Err(StorageError::SourceUnavailable { .. })
        ));
        Ok(())
    }
}
