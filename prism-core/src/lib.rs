//! PRISM Core - Customer Record Model and Classification
//!
//! Pure types and pure functions shared by the storage and API crates:
//! the tri-state customer record, MSISDN validation, and the profile
//! classifier that turns a record into a text summary.

pub mod classifier;
pub mod error;
pub mod msisdn;
pub mod record;

pub use classifier::{
    summarize, ClauseRule, Profile, ProfileClassifier, Recommend, CLAUSE_TABLE, EMPTY_SECTION,
    PROFILE_HEADER, RECOMMENDATIONS_HEADER, SECTION_SEPARATOR,
};
pub use error::{StorageError, StorageResult, ValidationError};
pub use msisdn::{is_valid_msisdn, normalize_identifier, Msisdn, MSISDN_PREFIXES};
pub use record::{Attribute, CustomerRecord, TriState, MSISDN_COLUMN};
