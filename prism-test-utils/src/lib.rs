//! PRISM Test Utilities
//!
//! Centralized test infrastructure for the PRISM workspace:
//! - Proptest generators for records and identifiers
//! - Fixture records, sources, and on-disk CSV tables
//! - Assertions over rendered profiles

pub use prism_core::{
    summarize, Attribute, ClauseRule, CustomerRecord, Profile, ProfileClassifier, Recommend,
    StorageError, StorageResult, TriState, CLAUSE_TABLE, MSISDN_COLUMN,
};
pub use prism_storage::{InMemorySource, RecordSource, SpreadsheetSource, Table};

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for PRISM types.

    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    /// Generate a TriState variant.
    pub fn arb_tri_state() -> impl Strategy<Value = TriState> {
        prop_oneof![
            Just(TriState::Yes),
            Just(TriState::No),
            Just(TriState::Unknown),
        ]
    }

    /// Generate an Attribute variant.
    pub fn arb_attribute() -> impl Strategy<Value = Attribute> {
        prop::sample::select(Attribute::ALL.to_vec())
    }

    /// Generate a well-formed MSISDN.
    pub fn arb_msisdn() -> impl Strategy<Value = String> {
        "6[5-9][0-9]{7}"
    }

    /// Generate a string that is never a well-formed MSISDN.
    pub fn arb_invalid_msisdn() -> impl Strategy<Value = String> {
        prop_oneof![
            "6[0-4][0-9]{7}",
            "[0-57-9][0-9]{8}",
            "6[5-9][0-9]{0,6}",
            "6[5-9][0-9]{8,10}",
            "6[5-9][0-9]{6}[a-z]",
        ]
    }

    /// Generate a CustomerRecord with a well-formed MSISDN.
    pub fn arb_customer_record() -> impl Strategy<Value = CustomerRecord> {
        (arb_msisdn(), prop::array::uniform7(arb_tri_state()))
            .prop_map(|(msisdn, values)| CustomerRecord::from_values(msisdn, values))
    }

    /// Generate up to `max` records with distinct MSISDNs.
    pub fn arb_customer_records(max: usize) -> impl Strategy<Value = Vec<CustomerRecord>> {
        prop::collection::vec(arb_customer_record(), 0..=max).prop_map(|records| {
            let mut seen = BTreeSet::new();
            records
                .into_iter()
                .filter(|r| seen.insert(r.msisdn.clone()))
                .collect()
        })
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built records and sources for common scenarios.

    use super::*;
    use std::path::{Path, PathBuf};

    /// MSISDN of the fixture customer with every attribute set to yes.
    pub const ALL_YES_MSISDN: &str = "650000001";
    /// MSISDN of the fixture customer with every attribute set to no.
    pub const ALL_NO_MSISDN: &str = "660000002";
    /// MSISDN of the fixture customer with no attribute data.
    pub const ALL_UNKNOWN_MSISDN: &str = "670000003";
    /// MSISDN of the fixture customer with mixed attributes.
    pub const MIXED_MSISDN: &str = "690000004";
    /// Well-formed MSISDN absent from every fixture table.
    pub const ABSENT_MSISDN: &str = "680000099";

    pub fn all_yes_record() -> CustomerRecord {
        CustomerRecord::from_values(ALL_YES_MSISDN, [TriState::Yes; Attribute::COUNT])
    }

    pub fn all_no_record() -> CustomerRecord {
        CustomerRecord::from_values(ALL_NO_MSISDN, [TriState::No; Attribute::COUNT])
    }

    pub fn all_unknown_record() -> CustomerRecord {
        CustomerRecord::new(ALL_UNKNOWN_MSISDN)
    }

    pub fn mixed_record() -> CustomerRecord {
        CustomerRecord::new(MIXED_MSISDN)
            .with(Attribute::Smartphone, TriState::Yes)
            .with(Attribute::DataUser, TriState::Yes)
            .with(Attribute::VoiceUser, TriState::No)
            .with(Attribute::MobileMoney, TriState::No)
            .with(Attribute::Vip, TriState::Yes)
    }

    /// The four fixture customers.
    pub fn sample_records() -> Vec<CustomerRecord> {
        vec![
            all_yes_record(),
            all_no_record(),
            all_unknown_record(),
            mixed_record(),
        ]
    }

    /// In-memory source over [`sample_records`].
    pub fn sample_source() -> InMemorySource {
        InMemorySource::from_records(&sample_records())
    }

    /// Write `records` as a CSV file named `file_name` inside `dir`.
    pub fn write_csv_table(
        dir: &Path,
        file_name: &str,
        records: &[CustomerRecord],
    ) -> Result<PathBuf, csv::Error> {
        let table = Table::from_records(records);
        write_csv_rows(dir, file_name, table.headers(), table.rows())
    }

    /// Write raw header and rows as a CSV file named `file_name` inside `dir`.
    pub fn write_csv_rows(
        dir: &Path,
        file_name: &str,
        headers: &[String],
        rows: &[Vec<String>],
    ) -> Result<PathBuf, csv::Error> {
        let path = dir.join(file_name);
        let mut writer = csv::WriterBuilder::new().flexible(true).from_path(&path)?;
        writer.write_record(headers)?;
        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(path)
    }
}

// ============================================================================
// ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Assertions over rendered profile text.

    use super::*;

    /// Assert that `text` lists exactly the descriptive clauses for the
    /// record's `Yes` attributes and the expected recommendations, in order.
    #[track_caller]
    pub fn assert_profile_matches(record: &CustomerRecord, text: &str) {
        let (profile_part, recommendation_part) = text
            .split_once(prism_core::SECTION_SEPARATOR)
            .unwrap_or_else(|| panic!("Profile text has no section separator: {text:?}"));

        let expected_descriptions: Vec<&str> = CLAUSE_TABLE
            .iter()
            .filter(|r| record.get(r.attribute) == TriState::Yes)
            .map(|r| r.yes_clause)
            .collect();
        let expected_recommendations: Vec<&str> = CLAUSE_TABLE
            .iter()
            .filter(|r| {
                r.recommend == Recommend::Always || record.get(r.attribute) == TriState::No
            })
            .map(|r| r.no_clause)
            .collect();

        assert_eq!(bullets(profile_part), expected_descriptions, "descriptions");
        assert_eq!(
            bullets(recommendation_part),
            expected_recommendations,
            "recommendations"
        );
    }

    fn bullets(section: &str) -> Vec<&str> {
        section
            .lines()
            .filter_map(|line| line.strip_prefix("- "))
            .filter(|line| *line != "none")
            .collect()
    }
}
