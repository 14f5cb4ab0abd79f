//! Account input models.
//!
//! Raw input accepted by the account service and its validated counterpart. Choice fields are
//! received as their stored codes and parsed during validation.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{Experience, Sex};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::validation::ValidationError,
    util::validate::{
        ACCOUNT_DESCRIPTION_MAX_LENGTH, ACCOUNT_REPOSITORY_REGEX_TEXT, NAME_MAX_LENGTH,
        non_blank, parse_choice, validate_birthdate, validate_linkedin, validate_max_length,
        validate_phone, validate_repository,
    },
};

/// Registration input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    /// Unique login name.
    pub username: String,
    /// E-mail address, lowercased before it is stored.
    pub email: String,
    /// Optional profile attributes.
    #[serde(default)]
    pub profile: ProfileUpdate,
}

impl NewAccount {
    /// Creates a registration with an empty profile.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            profile: ProfileUpdate::default(),
        }
    }

    /// Replaces the profile attributes.
    pub fn with_profile(mut self, profile: ProfileUpdate) -> Self {
        self.profile = profile;
        self
    }
}

/// Editable profile attributes of an account.
///
/// Blank optional values are stored as NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// First name, may be blank.
    pub firstname: String,
    /// Last name, may be blank.
    pub lastname: String,
    /// Phone number, blank values are treated as absent.
    pub phone: Option<String>,
    /// LinkedIn profile URL.
    pub linkedin: Option<String>,
    /// Repository or profile URL.
    pub repository: Option<String>,
    /// Experience code such as `"J"`.
    pub experience: Option<String>,
    /// Sex code such as `"F"`.
    pub sex: Option<String>,
    /// Birthdate, the account holder must be at least 14 years old.
    pub birthdate: Option<NaiveDate>,
    /// Free text about the account holder.
    pub description: String,
}

/// Profile attributes that passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedProfile {
    /// First name.
    pub firstname: String,
    /// Last name.
    pub lastname: String,
    /// Phone number matching the phone pattern.
    pub phone: Option<String>,
    /// LinkedIn profile URL matching the LinkedIn pattern.
    pub linkedin: Option<String>,
    /// Repository URL matching the repository pattern.
    pub repository: Option<String>,
    /// Experience level.
    pub experience: Option<Experience>,
    /// Sex.
    pub sex: Option<Sex>,
    /// Birthdate.
    pub birthdate: Option<NaiveDate>,
    /// Free text description.
    pub description: String,
}

impl ProfileUpdate {
    /// Validates every attribute, recording each failure in `errors`.
    ///
    /// Returns `None` when at least one attribute failed.
    pub fn validate(
        self,
        today: NaiveDate,
        errors: &mut ValidationError,
    ) -> Option<ValidatedProfile> {
        let failed_before = errors.errors().len();

        errors.check(validate_max_length(
            "firstname",
            &self.firstname,
            NAME_MAX_LENGTH,
        ));
        errors.check(validate_max_length("lastname", &self.lastname, NAME_MAX_LENGTH));
        errors.check(validate_max_length(
            "description",
            &self.description,
            ACCOUNT_DESCRIPTION_MAX_LENGTH,
        ));

        let phone = non_blank(self.phone);
        if let Some(phone) = &phone {
            errors.check(validate_phone(phone));
        }

        let linkedin = non_blank(self.linkedin);
        if let Some(linkedin) = &linkedin {
            errors.check(validate_linkedin(linkedin));
        }

        let repository = non_blank(self.repository);
        if let Some(repository) = &repository {
            errors.check(validate_repository(repository, ACCOUNT_REPOSITORY_REGEX_TEXT));
        }

        let experience = non_blank(self.experience).and_then(|code| {
            errors.check(parse_choice("experience", &code, Experience::from_code))
        });
        let sex = non_blank(self.sex)
            .and_then(|code| errors.check(parse_choice("sex", &code, Sex::from_code)));

        if let Some(birthdate) = self.birthdate {
            errors.check(validate_birthdate(birthdate, today));
        }

        if errors.errors().len() > failed_before {
            return None;
        }

        Some(ValidatedProfile {
            firstname: self.firstname,
            lastname: self.lastname,
            phone,
            linkedin,
            repository,
            experience,
            sex,
            birthdate: self.birthdate,
            description: self.description,
        })
    }
}

/// Lowercases an e-mail address the way it is stored.
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}
