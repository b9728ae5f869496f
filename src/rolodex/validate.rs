//! Entry validation.
//!
//! An entry is accepted when:
//! - The name is non-empty
//! - The name is not already used by another entry
//! - At least one of phone or email is given
//! - The phone, if given, is made of decimal digits only
//! - The email, if given, looks like `local-part@domain.tld`
//!
//! Checks run in that order and stop at the first failure, so the user always
//! sees a single reason.

use crate::model::Entry;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email pattern is valid")
});

/// Whether the candidate is a new entry or a rewrite of an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation<'a> {
    Add,
    /// Keeping `original_name` is allowed; renaming onto another entry is not.
    Edit { original_name: &'a str },
}

/// Validates candidate entry fields against the current directory.
///
/// # Examples
/// ```
/// use rolodex::model::Entry;
/// use rolodex::validate::{validate, Mutation, ValidationError};
///
/// let directory = vec![Entry::new("Alice", "123", "", false)];
///
/// assert!(validate(&directory, Mutation::Add, "Bob", "456", "").is_ok());
/// assert_eq!(
///     validate(&directory, Mutation::Add, "Alice", "1", ""),
///     Err(ValidationError::NameExists)
/// );
/// assert!(validate(
///     &directory,
///     Mutation::Edit { original_name: "Alice" },
///     "Alice",
///     "123",
///     ""
/// )
/// .is_ok());
/// ```
pub fn validate(
    directory: &[Entry],
    mutation: Mutation<'_>,
    name: &str,
    phone: &str,
    email: &str,
) -> Result<(), ValidationError> {
    let duplicate = match mutation {
        Mutation::Add => name_exists(directory, name),
        Mutation::Edit { original_name } => {
            name != original_name && name_exists(directory, name)
        }
    };
    validate_with(duplicate, name, phone, email)
}

/// [`validate`] with the duplicate-name lookup already answered by the caller.
pub fn validate_with(
    duplicate: bool,
    name: &str,
    phone: &str,
    email: &str,
) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if duplicate {
        return Err(ValidationError::NameExists);
    }

    if phone.is_empty() && email.is_empty() {
        return Err(ValidationError::NoContact);
    }

    if !phone.is_empty() && !is_valid_phone(phone) {
        return Err(ValidationError::InvalidPhone);
    }

    if !email.is_empty() && !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

pub fn name_exists(directory: &[Entry], name: &str) -> bool {
    directory.iter().any(|entry| entry.name == name)
}

/// Non-empty and ASCII digits only. Separators such as `-` or spaces are rejected.
pub fn is_valid_phone(phone: &str) -> bool {
    !phone.is_empty() && phone.chars().all(|c| c.is_ascii_digit())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Reason an entry was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    NameExists,
    /// Neither phone nor email was provided
    NoContact,
    InvalidPhone,
    InvalidEmail,
}

impl ValidationError {
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "Empty name",
            ValidationError::NameExists => "Name already exists",
            ValidationError::NoContact => "No phone or email provided",
            ValidationError::InvalidPhone => "Invalid phone",
            ValidationError::InvalidEmail => "Invalid email",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

impl std::error::Error for ValidationError {}
