//! MSISDN validation and identifier normalization

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::error::ValidationError;

/// Accepted numbering prefixes, followed by exactly 7 digits.
pub const MSISDN_PREFIXES: [&str; 5] = ["65", "66", "67", "68", "69"];

static MSISDN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(65|66|67|68|69)[0-9]{7}$").expect("Invalid MSISDN regex"));

/// Check whether `input` is a well-formed subscriber number.
pub fn is_valid_msisdn(input: &str) -> bool {
    MSISDN_PATTERN.is_match(input)
}

/// Normalize an identifier read from a table cell.
///
/// Trims whitespace and drops a trailing `.0` left behind when a number
/// column was stored as a float.
pub fn normalize_identifier(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.strip_suffix(".0") {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            digits.to_string()
        }
        _ => trimmed.to_string(),
    }
}

/// A validated subscriber number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Msisdn(String);

impl Msisdn {
    /// Validate `input` as-is; surrounding whitespace is rejected.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::RequiredFieldMissing {
                field: "msisdn".to_string(),
            });
        }
        if !is_valid_msisdn(input) {
            return Err(ValidationError::InvalidValue {
                field: "msisdn".to_string(),
                reason: format!(
                    "expected one of the prefixes {} followed by 7 digits",
                    MSISDN_PREFIXES.join(", ")
                ),
            });
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Msisdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Msisdn> for String {
    fn from(value: Msisdn) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_prefix_65() {
        assert!(is_valid_msisdn("650000000"));
    }

    #[test]
    fn test_invalid_prefix_64() {
        assert!(!is_valid_msisdn("640000000"));
    }

    #[test]
    fn test_too_short() {
        assert!(!is_valid_msisdn("6500000"));
    }

    #[test]
    fn test_too_long() {
        assert!(!is_valid_msisdn("6500000000"));
    }

    #[test]
    fn test_rejects_surrounding_whitespace_and_letters() {
        assert!(!is_valid_msisdn(" 650000000"));
        assert!(!is_valid_msisdn("650000000\n"));
        assert!(!is_valid_msisdn("65000000a"));
        assert!(!is_valid_msisdn(""));
    }

    #[test]
    fn test_all_prefixes_accepted() {
        for prefix in MSISDN_PREFIXES {
            assert!(is_valid_msisdn(&format!("{prefix}1234567")), "{prefix}");
        }
    }

    #[test]
    fn test_normalize_identifier() {
        assert_eq!(normalize_identifier(" 650000000 "), "650000000");
        assert_eq!(normalize_identifier("650000000.0"), "650000000");
        assert_eq!(normalize_identifier("abc.0"), "abc.0");
        assert_eq!(normalize_identifier(".0"), ".0");
    }

    #[test]
    fn test_msisdn_parse() {
        let msisdn = Msisdn::parse("691234567").map_err(|e| e.to_string());
        assert_eq!(msisdn.as_ref().map(|m| m.as_str()), Ok("691234567"));
        assert_eq!(msisdn.map(String::from), Ok("691234567".to_string()));
        assert!(matches!(
            Msisdn::parse(""),
            Err(ValidationError::RequiredFieldMissing { .. })
        ));
        assert!(matches!(
            Msisdn::parse("640000000"),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_valid_prefix_and_seven_digits_accepted(
            prefix in 65u8..=69,
            rest in "[0-9]{7}",
        ) {
            let input = format!("{prefix}{rest}");
            prop_assert!(is_valid_msisdn(&input));
        }

        #[test]
        fn prop_other_prefixes_rejected(
            prefix in (10u8..=99).prop_filter("outside accepted range", |p| !(65..=69).contains(p)),
            rest in "[0-9]{7}",
        ) {
            let input = format!("{prefix}{rest}");
            prop_assert!(!is_valid_msisdn(&input));
        }

        #[test]
        fn prop_wrong_length_rejected(digits in "6[5-9][0-9]{0,6}|6[5-9][0-9]{8,12}") {
            prop_assert!(!is_valid_msisdn(&digits));
        }
    }
}
