//! Form submission payload and validated fields
//!
//! `FormSubmission` is what arrives on the wire; every field is optional so
//! a missing key surfaces as `ValidationError::Missing` instead of a body
//! rejection. `ValidSubmission::try_from` is the only way to get a value the
//! store and exporter accept.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{CountryCode, ValidationError};

/// Maximum length for name and email (matches the VARCHAR(255) columns)
const MAX_TEXT_LEN: usize = 255;

/// E.164 caps subscriber numbers at 15 digits
const MAX_PHONE_DIGITS: usize = 15;

/// One `@`, no whitespace, and a dot somewhere in the domain
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex")
});

/// Raw form payload as posted by the page.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, ValidationError> {
    value
        .as_deref()
        .ok_or(ValidationError::Missing { field })
}

/// Submitter's name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        if s.chars().count() > MAX_TEXT_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_TEXT_LEN,
            });
        }
        // Control characters would break the line-per-field export
        if s.chars().any(char::is_control) {
            return Err(ValidationError::InvalidFormat {
                field: "name",
                reason: "must not contain control characters",
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Email address (shape check only, no deliverability)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }
        if s.chars().count() > MAX_TEXT_LEN {
            return Err(ValidationError::TooLong {
                field: "email",
                max: MAX_TEXT_LEN,
            });
        }
        if s.chars().any(char::is_control) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must not contain control characters",
            });
        }
        if !EMAIL_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must look like local@domain.tld",
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Phone number, stored as bare digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Strips common separators (spaces, `-`, `.`, parentheses) before
    /// checking that only digits remain.
    ///
    /// # Example
    /// ```
    /// use formfill_server::models::PhoneNumber;
    ///
    /// assert_eq!(PhoneNumber::new("(987) 654-3210").unwrap().as_str(), "9876543210");
    /// assert!(PhoneNumber::new("call me").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let digits: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
            .collect();

        if digits.is_empty() {
            return Err(ValidationError::Empty { field: "phone" });
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat {
                field: "phone",
                reason: "must contain only digits",
            });
        }
        if digits.len() > MAX_PHONE_DIGITS {
            return Err(ValidationError::TooLong {
                field: "phone",
                max: MAX_PHONE_DIGITS,
            });
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A submission whose four fields have all passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub name: PersonName,
    pub email: Email,
    pub country_code: CountryCode,
    pub phone: PhoneNumber,
}

impl TryFrom<&FormSubmission> for ValidSubmission {
    type Error = ValidationError;

    /// Fields are checked in form order; the first failure wins.
    fn try_from(form: &FormSubmission) -> Result<Self, Self::Error> {
        Ok(Self {
            name: PersonName::new(required(&form.name, "name")?)?,
            email: Email::new(required(&form.email, "email")?)?,
            country_code: CountryCode::new(required(&form.country_code, "country code")?)?,
            phone: PhoneNumber::new(required(&form.phone, "phone")?)?,
        })
    }
}

impl TryFrom<FormSubmission> for ValidSubmission {
    type Error = ValidationError;

    fn try_from(form: FormSubmission) -> Result<Self, Self::Error> {
        Self::try_from(&form)
    }
}
