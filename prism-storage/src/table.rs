//! Raw string table and row lookup

use prism_core::{
    normalize_identifier, Attribute, CustomerRecord, StorageError, StorageResult, TriState,
    MSISDN_COLUMN,
};

/// Header row plus data rows, every cell already rendered as a string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Column positions of the identifier and the seven attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub msisdn: usize,
    pub attributes: [usize; Attribute::COUNT],
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Build a table in the canonical column layout from typed records.
    ///
    /// `Unknown` values are written as empty cells.
    pub fn from_records(records: &[CustomerRecord]) -> Self {
        let headers = std::iter::once(MSISDN_COLUMN)
            .chain(Attribute::ALL.iter().map(|a| a.column_name()))
            .map(str::to_string)
            .collect();

        let rows = records
            .iter()
            .map(|record| {
                std::iter::once(record.msisdn.clone())
                    .chain(record.iter().map(|(_, value)| match value {
                        TriState::Unknown => String::new(),
                        known => known.as_str().to_string(),
                    }))
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn position_of(&self, column: &str) -> StorageResult<usize> {
        self.headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(column))
            .ok_or_else(|| StorageError::MissingColumn {
                column: column.to_string(),
            })
    }

    /// Resolve the required columns by case-insensitive header match.
    pub fn column_map(&self) -> StorageResult<ColumnMap> {
        let msisdn = self.position_of(MSISDN_COLUMN)?;
        let mut attributes = [0usize; Attribute::COUNT];
        for attribute in Attribute::ALL {
            attributes[attribute.index()] = self.position_of(attribute.column_name())?;
        }
        Ok(ColumnMap { msisdn, attributes })
    }

    /// Linear scan for the first row whose identifier equals `msisdn`.
    ///
    /// Only the table side is normalized; the requested identifier is just
    /// trimmed.
    pub fn find_record(&self, msisdn: &str) -> StorageResult<Option<CustomerRecord>> {
        let columns = self.column_map()?;
        let wanted = msisdn.trim();
        if wanted.is_empty() {
            return Ok(None);
        }

        let found = self
            .rows
            .iter()
            .find(|row| normalize_identifier(cell(row, columns.msisdn)) == wanted);

        Ok(found.map(|row| materialize(row, wanted, &columns)))
    }
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

fn materialize(row: &[String], msisdn: &str, columns: &ColumnMap) -> CustomerRecord {
    let mut record = CustomerRecord::new(msisdn);
    for attribute in Attribute::ALL {
        let raw = cell(row, columns.attributes[attribute.index()]);
        let value = TriState::parse_cell(raw).unwrap_or_else(|| {
            tracing::warn!(
                msisdn,
                column = attribute.column_name(),
                value = raw,
                "Unrecognised attribute value, treating as unknown"
            );
            TriState::Unknown
        });
        record.set(attribute, value);
    }
    record
}
