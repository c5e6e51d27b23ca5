//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod country;
pub mod submission;
pub mod validation;

pub use country::CountryCode;
pub use submission::{Email, FormSubmission, PersonName, PhoneNumber, ValidSubmission};
pub use validation::ValidationError;
