//! Customer record types

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// TRI-STATE
// ============================================================================

/// Value of a yes/no attribute as read from the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    Yes,
    No,
    /// Cell was empty, missing, or held an unrecognised value.
    #[default]
    Unknown,
}

impl TriState {
    /// Interpret a raw spreadsheet cell.
    ///
    /// Returns `None` for non-empty values that are neither yes-like nor
    /// no-like so the caller can decide whether to log them. Empty and
    /// null-like cells map to `Some(Unknown)`.
    pub fn parse_cell(cell: &str) -> Option<Self> {
        match cell.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" | "1" | "oui" => Some(TriState::Yes),
            "no" | "n" | "false" | "0" | "non" => Some(TriState::No),
            "" | "nan" | "null" | "none" | "n/a" => Some(TriState::Unknown),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TriState::Yes => "yes",
            TriState::No => "no",
            TriState::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ATTRIBUTES
// ============================================================================

/// The seven customer characteristics tracked per record.
///
/// Variant order is the declaration order used by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Smartphone,
    DataUser,
    VoiceUser,
    SmsUser,
    MobileMoney,
    Roaming,
    Vip,
}

impl Attribute {
    /// Number of tracked attributes.
    pub const COUNT: usize = 7;

    /// All attributes in declaration order.
    pub const ALL: [Attribute; Attribute::COUNT] = [
        Attribute::Smartphone,
        Attribute::DataUser,
        Attribute::VoiceUser,
        Attribute::SmsUser,
        Attribute::MobileMoney,
        Attribute::Roaming,
        Attribute::Vip,
    ];

    /// Column header for this attribute in the backing table.
    pub fn column_name(&self) -> &'static str {
        match self {
            Attribute::Smartphone => "smartphone",
            Attribute::DataUser => "data_user",
            Attribute::VoiceUser => "voice_user",
            Attribute::SmsUser => "sms_user",
            Attribute::MobileMoney => "mobile_money",
            Attribute::Roaming => "roaming",
            Attribute::Vip => "vip",
        }
    }

    /// Position in [`Attribute::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// Column header holding the customer identifier.
pub const MSISDN_COLUMN: &str = "msisdn";

/// One customer row, materialised from the data source on each lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub msisdn: String,
    attributes: [TriState; Attribute::COUNT],
}

impl CustomerRecord {
    /// Create a record with every attribute `Unknown`.
    pub fn new(msisdn: impl Into<String>) -> Self {
        Self {
            msisdn: msisdn.into(),
            attributes: [TriState::Unknown; Attribute::COUNT],
        }
    }

    /// Create a record from attribute values in declaration order.
    pub fn from_values(msisdn: impl Into<String>, attributes: [TriState; Attribute::COUNT]) -> Self {
        Self {
            msisdn: msisdn.into(),
            attributes,
        }
    }

    pub fn with(mut self, attribute: Attribute, value: TriState) -> Self {
        self.set(attribute, value);
        self
    }

    pub fn set(&mut self, attribute: Attribute, value: TriState) {
        self.attributes[attribute.index()] = value;
    }

    pub fn get(&self, attribute: Attribute) -> TriState {
        self.attributes[attribute.index()]
    }

    /// Iterate `(attribute, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, TriState)> + '_ {
        Attribute::ALL.iter().map(move |a| (*a, self.get(*a)))
    }
}
