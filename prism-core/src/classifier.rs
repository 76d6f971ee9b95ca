//! Profile classification and recommendation rendering
//!
//! Every attribute is looked up in [`CLAUSE_TABLE`] independently:
//! a `Yes` contributes its descriptive clause, a `No` contributes its
//! recommendation, and rules marked [`Recommend::Always`] contribute their
//! recommendation regardless of the attribute value.

use serde::Serialize;
use std::fmt;

use crate::record::{Attribute, CustomerRecord, TriState};

// ============================================================================
// CLAUSE TABLE
// ============================================================================

/// When a rule's recommendation clause is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommend {
    /// Only when the attribute is `No`.
    WhenNo,
    /// Whatever the attribute value, including `Unknown`.
    Always,
}

/// Clauses attached to one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClauseRule {
    pub attribute: Attribute,
    pub yes_clause: &'static str,
    pub no_clause: &'static str,
    pub recommend: Recommend,
}

impl ClauseRule {
    fn describe(&self, value: TriState) -> Option<&'static str> {
        (value == TriState::Yes).then_some(self.yes_clause)
    }

    fn recommendation(&self, value: TriState) -> Option<&'static str> {
        match (self.recommend, value) {
            (Recommend::Always, _) | (Recommend::WhenNo, TriState::No) => Some(self.no_clause),
            _ => None,
        }
    }
}

/// Attribute → clause mapping, in attribute declaration order.
pub const CLAUSE_TABLE: [ClauseRule; Attribute::COUNT] = [
    ClauseRule {
        attribute: Attribute::Smartphone,
        yes_clause: "Uses a smartphone.",
        no_clause: "Offer a smartphone on an instalment plan.",
        recommend: Recommend::WhenNo,
    },
    ClauseRule {
        attribute: Attribute::DataUser,
        yes_clause: "Consumes mobile data regularly.",
        no_clause: "Propose a starter data bundle with a free trial period.",
        recommend: Recommend::WhenNo,
    },
    ClauseRule {
        attribute: Attribute::VoiceUser,
        yes_clause: "Makes frequent voice calls.",
        no_clause: "Suggest a voice bundle with discounted on-net minutes.",
        recommend: Recommend::WhenNo,
    },
    ClauseRule {
        attribute: Attribute::SmsUser,
        yes_clause: "Sends SMS regularly.",
        no_clause: "Promote an SMS pack bundled with the next recharge.",
        recommend: Recommend::WhenNo,
    },
    ClauseRule {
        attribute: Attribute::MobileMoney,
        yes_clause: "Holds an active mobile money wallet.",
        no_clause: "Present the mobile money offers: cash-back on transfers and bill payment.",
        recommend: Recommend::Always,
    },
    ClauseRule {
        attribute: Attribute::Roaming,
        yes_clause: "Travels abroad and uses roaming.",
        no_clause: "Advertise roaming passes ahead of the travel season.",
        recommend: Recommend::WhenNo,
    },
    ClauseRule {
        attribute: Attribute::Vip,
        yes_clause: "Belongs to the VIP segment.",
        no_clause: "Check eligibility for the loyalty programme rewards.",
        recommend: Recommend::Always,
    },
];

// ============================================================================
// PROFILE
// ============================================================================

/// Header opening the descriptive section.
pub const PROFILE_HEADER: &str = "Profile for";
/// Header opening the recommendation section.
pub const RECOMMENDATIONS_HEADER: &str = "Recommendations:";
/// Separator between the two sections.
pub const SECTION_SEPARATOR: &str = "\n\n";
/// Line emitted for a section with no clauses.
pub const EMPTY_SECTION: &str = "- none";

/// Classified view of a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub msisdn: String,
    pub descriptions: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
}

impl Profile {
    /// Render the profile as the two-section text summary.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, clauses: &[&'static str]) -> fmt::Result {
    if clauses.is_empty() {
        return write!(f, "\n{}", EMPTY_SECTION);
    }
    for clause in clauses {
        write!(f, "\n- {}", clause)?;
    }
    Ok(())
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:", PROFILE_HEADER, self.msisdn)?;
        write_section(f, &self.descriptions)?;
        f.write_str(SECTION_SEPARATOR)?;
        f.write_str(RECOMMENDATIONS_HEADER)?;
        write_section(f, &self.recommendations)
    }
}

// ============================================================================
// CLASSIFIER
// ============================================================================

/// Stateless classifier over a clause table.
#[derive(Debug, Clone, Copy)]
pub struct ProfileClassifier {
    rules: &'static [ClauseRule],
}

impl Default for ProfileClassifier {
    fn default() -> Self {
        Self {
            rules: &CLAUSE_TABLE,
        }
    }
}

impl ProfileClassifier {
    pub fn new(rules: &'static [ClauseRule]) -> Self {
        Self { rules }
    }

    pub fn classify(&self, record: &CustomerRecord) -> Profile {
        let mut descriptions = Vec::new();
        let mut recommendations = Vec::new();

        for rule in self.rules {
            let value = record.get(rule.attribute);
            descriptions.extend(rule.describe(value));
            recommendations.extend(rule.recommendation(value));
        }

        Profile {
            msisdn: record.msisdn.clone(),
            descriptions,
            recommendations,
        }
    }
}

/// Classify and render with the default clause table.
pub fn summarize(record: &CustomerRecord) -> String {
    ProfileClassifier::default().classify(record).render()
}
