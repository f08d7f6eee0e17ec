//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during field value validation.
///
/// Every variant is raised at construction time; no partially built value
/// ever escapes a failed constructor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    #[error("Phone number must be 10 digits long: {0}")]
    InvalidPhoneFormat(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    #[error("Invalid date format, use DD.MM.YYYY: {0}")]
    InvalidDateFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "Contact name cannot be empty"
        );
        assert_eq!(
            ValidationError::InvalidPhoneFormat("12345".to_string()).to_string(),
            "Phone number must be 10 digits long: 12345"
        );
        assert_eq!(
            ValidationError::InvalidDateFormat("2020-05-01".to_string()).to_string(),
            "Invalid date format, use DD.MM.YYYY: 2020-05-01"
        );
    }
}
