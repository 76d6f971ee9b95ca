//! PRISM Storage - Record Source Trait and Implementations
//!
//! Defines the read-only data-access interface used by the API layer to
//! locate a customer row by MSISDN. Two implementations are provided:
//! [`SpreadsheetSource`] re-reads a CSV or workbook file on every lookup,
//! and [`InMemorySource`] serves a fixed [`Table`] for tests and fixtures.

pub mod spreadsheet;
pub mod table;

pub use spreadsheet::{SourceFormat, SpreadsheetSource};
pub use table::{ColumnMap, Table};

use prism_core::{CustomerRecord, StorageResult};

// ============================================================================
// RECORD SOURCE TRAIT
// ============================================================================

/// Read-only lookup of customer records.
///
/// Implementations hold no per-request state; every call reads the backing
/// data afresh.
pub trait RecordSource: Send + Sync {
    /// Return the first record whose identifier equals `msisdn`, or `None`.
    fn find_record(&self, msisdn: &str) -> StorageResult<Option<CustomerRecord>>;

    /// Verify the backing data can be read and carries the required columns.
    fn check_available(&self) -> StorageResult<()>;

    /// Short label for logs and health output.
    fn describe(&self) -> String;
}

// ============================================================================
// IN-MEMORY SOURCE
// ============================================================================

/// Record source over a table held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    table: Table,
}

impl InMemorySource {
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    pub fn from_records(records: &[CustomerRecord]) -> Self {
        Self::new(Table::from_records(records))
    }
}

impl RecordSource for InMemorySource {
    fn find_record(&self, msisdn: &str) -> StorageResult<Option<CustomerRecord>> {
        self.table.find_record(msisdn)
    }

    fn check_available(&self) -> StorageResult<()> {
        self.table.column_map().map(|_| ())
    }

    fn describe(&self) -> String {
        format!("memory:{} rows", self.table.len())
    }
}
