//! Field validators for accounts and ideas.
//!
//! Each validator checks a single value and returns a [`FieldError`] naming the field when the
//! value is rejected. Services collect these into a
//! [`ValidationError`](crate::server::error::validation::ValidationError) so every failing field
//! is reported together.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::server::error::validation::{ErrorCode, FieldError};

/// Maximum length of a username.
pub const USERNAME_MAX_LENGTH: usize = 30;
/// Maximum length of an e-mail address.
pub const EMAIL_MAX_LENGTH: usize = 254;
/// Maximum length of first and last names.
pub const NAME_MAX_LENGTH: usize = 30;
/// Maximum length of a phone number.
pub const PHONE_MAX_LENGTH: usize = 12;
/// Maximum length of LinkedIn and repository URLs.
pub const URL_MAX_LENGTH: usize = 80;
/// Maximum length of an account description.
pub const ACCOUNT_DESCRIPTION_MAX_LENGTH: usize = 200;

/// Minimum age in years required to hold an account.
pub const MINIMUM_AGE_YEARS: i64 = 14;

/// Message for a username not matching the pattern.
pub const USERNAME_REGEX_TEXT: &str =
    "Enter a valid username. This value may contain only letters, numbers and _ character.";
/// Message for an e-mail not matching the pattern.
pub const EMAIL_REGEX_TEXT: &str =
    "E-mail must consist of username, @ symbol, domain name, dot and domain.";
/// Message for a phone number not matching the pattern.
pub const PHONE_REGEX_TEXT: &str = "Phone number must be entered in the format: 123456789 or \
    +48123456789. Up to 12 digits allowed.";
/// Message for a LinkedIn URL not matching the pattern.
pub const LINKEDIN_REGEX_TEXT: &str = "Linkedin Profile must be entered in the format: \
    linkedin.com/in/user or http(s)://linkedin.com/in/user . Limited address size.";
/// Message for an invalid account repository URL.
pub const ACCOUNT_REPOSITORY_REGEX_TEXT: &str = "Provide correct url to your repository or profile.";
/// Message for an invalid idea repository URL.
pub const IDEA_REPOSITORY_REGEX_TEXT: &str = "Provide correct url to repository of your idea.";
/// Message for an account holder younger than the minimum age.
pub const BIRTHDATE_VALID_TEXT: &str =
    "You must be at least 14 years old in order to have an account.";

// One or more word characters (alphanumerics and underscore).
static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w+$").expect("valid username regex"));

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.+_-]+@[A-Za-z0-9._-]+\.[a-zA-Z]+$").expect("valid email regex")
});

// Optional leading '+' and '1', then 9 to 12 digits.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?1?\d{9,12}$").expect("valid phone regex"));

// Profile path must end the value, with at most one trailing slash, so nothing can redirect
// elsewhere after it.
static LINKEDIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\S*)(https?://(\w+\.)?)?linkedin\.com/in/[A-z0-9_-]+/?$")
        .expect("valid linkedin regex")
});

// Either `user@host:path` (ssh) or `http(s)://[user@]host[:port]/path`, optionally ending
// in `.git`.
static REPOSITORY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(([A-Za-z0-9]+@|https?://)|(https?://[A-Za-z0-9]+@))([A-Za-z0-9.]+(:\d+)?)(:|/)([\d/\w.-]+?)(\.git)?$",
    )
    .expect("valid repository regex")
});

/// Rejects blank values.
pub fn validate_required(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new(
            field,
            ErrorCode::Required,
            "This field cannot be blank.",
        ));
    }

    Ok(())
}

/// Rejects values with more than `max` characters.
pub fn validate_max_length(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), FieldError> {
    let length = value.chars().count();

    if length > max {
        return Err(FieldError::new(
            field,
            ErrorCode::MaxLength,
            format!(
                "Ensure this value has at most {} characters (it has {}).",
                max, length
            ),
        ));
    }

    Ok(())
}

/// Checks a username is present, short enough and made of word characters.
pub fn validate_username(value: &str) -> Result<(), FieldError> {
    validate_required("username", value)?;
    validate_max_length("username", value, USERNAME_MAX_LENGTH)?;

    if !USERNAME_REGEX.is_match(value) {
        return Err(FieldError::new(
            "username",
            ErrorCode::Invalid,
            USERNAME_REGEX_TEXT,
        ));
    }

    Ok(())
}

/// Checks an e-mail address is present, at most 254 characters and well formed.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    validate_required("email", value)?;
    validate_max_length("email", value, EMAIL_MAX_LENGTH)?;

    if !EMAIL_REGEX.is_match(value) {
        return Err(FieldError::new("email", ErrorCode::Invalid, EMAIL_REGEX_TEXT));
    }

    Ok(())
}

/// Checks a phone number of 9 to 12 digits with an optional `+`.
pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    validate_max_length("phone", value, PHONE_MAX_LENGTH)?;

    if !PHONE_REGEX.is_match(value) {
        return Err(FieldError::new("phone", ErrorCode::Invalid, PHONE_REGEX_TEXT));
    }

    Ok(())
}

/// Checks a LinkedIn profile URL.
pub fn validate_linkedin(value: &str) -> Result<(), FieldError> {
    validate_max_length("linkedin", value, URL_MAX_LENGTH)?;

    if !LINKEDIN_REGEX.is_match(value) {
        return Err(FieldError::new(
            "linkedin",
            ErrorCode::Invalid,
            LINKEDIN_REGEX_TEXT,
        ));
    }

    Ok(())
}

/// Validates a repository address, reporting `message` on mismatch.
///
/// Accounts and ideas both have a `repository` field with different wording for the error.
pub fn validate_repository(value: &str, message: &str) -> Result<(), FieldError> {
    validate_max_length("repository", value, URL_MAX_LENGTH)?;

    if !REPOSITORY_REGEX.is_match(value) {
        return Err(FieldError::new("repository", ErrorCode::Invalid, message));
    }

    Ok(())
}

/// Checks the account holder is at least [`MINIMUM_AGE_YEARS`] old on `today`.
///
/// Age is measured as whole days divided by 365, so birthdates in the future and today are
/// always rejected.
pub fn validate_birthdate(value: NaiveDate, today: NaiveDate) -> Result<(), FieldError> {
    let days = (today - value).num_days();

    if days < MINIMUM_AGE_YEARS * 365 {
        return Err(FieldError::new(
            "birthdate",
            ErrorCode::Invalid,
            BIRTHDATE_VALID_TEXT,
        ));
    }

    Ok(())
}

/// Parses a single choice code with `parse`.
///
/// Multiple values such as `"N,J"` are not a code of any choice and are rejected.
pub fn parse_choice<T>(
    field: &'static str,
    value: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, FieldError> {
    parse(value).ok_or_else(|| {
        FieldError::new(
            field,
            ErrorCode::InvalidChoice,
            format!("Value '{}' is not a valid choice.", value),
        )
    })
}

/// Maps blank optional input to `None` so it is stored as NULL.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
