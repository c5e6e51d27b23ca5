//! Country dial codes
//!
//! Accepts either a dial code (`+91`) or one of the spoken country names the
//! voice front-end understands (`india`, `bharat`, ...).

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

const FIELD: &str = "country code";

/// Maximum stored length (matches the `country_code` column)
const MAX_COUNTRY_CODE_LEN: usize = 10;

/// `+` followed by 1-4 digits
static DIAL_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[0-9]{1,4}$").expect("invalid dial code regex"));

/// Country names recognised in place of a dial code (lowercase).
const KNOWN_COUNTRIES: &[(&str, &str)] = &[
    ("united states", "+1"),
    ("america", "+1"),
    ("united kingdom", "+44"),
    ("uk", "+44"),
    ("australia", "+61"),
    ("japan", "+81"),
    ("india", "+91"),
    ("bharat", "+91"),
];

/// Look up the dial code for a country name, ignoring case and surrounding
/// whitespace.
pub fn dial_code_for(country: &str) -> Option<&'static str> {
    let wanted = country.trim().to_lowercase();
    KNOWN_COUNTRIES
        .iter()
        .find(|(name, _)| *name == wanted)
        .map(|(_, code)| *code)
}

/// Validated country dial code, always stored in `+<digits>` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    /// Parse a dial code or a known country name.
    ///
    /// # Example
    /// ```
    /// use formfill_server::models::CountryCode;
    ///
    /// assert_eq!(CountryCode::new("+44").unwrap().as_str(), "+44");
    /// assert_eq!(CountryCode::new("India").unwrap().as_str(), "+91");
    /// assert!(CountryCode::new("44").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Empty { field: FIELD });
        }

        if let Some(code) = dial_code_for(s) {
            return Ok(Self(code.to_owned()));
        }

        if s.len() > MAX_COUNTRY_CODE_LEN {
            return Err(ValidationError::TooLong {
                field: FIELD,
                max: MAX_COUNTRY_CODE_LEN,
            });
        }

        if !DIAL_CODE_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: FIELD,
                reason: "must be '+' followed by 1-4 digits or a known country name",
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_dial_codes() {
        assert_eq!(CountryCode::new("+1").unwrap().as_str(), "+1");
        assert_eq!(CountryCode::new(" +1234 ").unwrap().as_str(), "+1234");
    }

    #[test]
    fn resolves_country_names() {
        assert_eq!(CountryCode::new("United Kingdom").unwrap().as_str(), "+44");
        assert_eq!(CountryCode::new("UK").unwrap().as_str(), "+44");
        assert_eq!(CountryCode::new("bharat").unwrap().as_str(), "+91");
        assert_eq!(dial_code_for("  Japan "), Some("+81"));
        assert_eq!(dial_code_for("atlantis"), None);
    }

    #[test]
    fn rejects_bad_codes() {
        for input in ["1", "+", "+12345", "+1a", "atlantis"] {
            let err = CountryCode::new(input).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { .. }),
                "{input} should be rejected as invalid format"
            );
        }
    }

    #[test]
    fn rejects_empty() {
        let err = CountryCode::new("   ").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn rejects_overlong() {
        let err = CountryCode::new("+12345678901").unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 10, .. }));
    }
}
