//! Idea input models and views.

use std::fmt;

use entity::sea_orm_active_enums::Experience;
use serde::{Deserialize, Serialize};

use crate::server::{
    error::validation::{ErrorCode, FieldError, ValidationError},
    util::validate::{
        IDEA_REPOSITORY_REGEX_TEXT, non_blank, parse_choice, validate_max_length,
        validate_repository, validate_required,
    },
};

/// Maximum length of an idea title.
pub const TITLE_MAX_LENGTH: usize = 200;
/// Maximum length of an idea description.
pub const IDEA_DESCRIPTION_MAX_LENGTH: usize = 2000;
/// Maximum length of the stored advancement codes.
pub const ADVANCEMENT_MAX_LENGTH: usize = 4;
/// Largest accepted team size.
pub const TEAM_SIZE_MAX: i32 = i16::MAX as i32;

/// Idea creation input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIdea {
    /// Title, required.
    pub title: String,
    /// Description, required.
    pub description: String,
    /// Repository URL of the idea.
    pub repository: Option<String>,
    /// Experience codes required by the idea, such as `["J", "R"]`.
    #[serde(default)]
    pub advancement: Vec<String>,
    /// Number of people the team should have.
    pub team_size: i32,
    /// Technology terms to link.
    #[serde(default)]
    pub technology_ids: Vec<i32>,
    /// Framework terms to link.
    #[serde(default)]
    pub framework_ids: Vec<i32>,
    /// Specialization terms to link.
    #[serde(default)]
    pub specialization_ids: Vec<i32>,
    /// Accounts invited to join the idea.
    #[serde(default)]
    pub finder_ids: Vec<i32>,
}

/// Idea attributes that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedIdea {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Repository URL, `None` when blank.
    pub repository: Option<String>,
    /// Required experience levels.
    pub advancement: Advancement,
    /// Team size.
    pub team_size: i16,
    /// Technology terms to link.
    pub technology_ids: Vec<i32>,
    /// Framework terms to link.
    pub framework_ids: Vec<i32>,
    /// Specialization terms to link.
    pub specialization_ids: Vec<i32>,
    /// Accounts joining as finders.
    pub finder_ids: Vec<i32>,
}

impl NewIdea {
    /// Validates every attribute, recording each failure in `errors`.
    ///
    /// Returns `None` when at least one attribute failed.
    pub fn validate(self, errors: &mut ValidationError) -> Option<ValidatedIdea> {
        let failed_before = errors.errors().len();

        if errors.check(validate_required("title", &self.title)).is_some() {
            errors.check(validate_max_length("title", &self.title, TITLE_MAX_LENGTH));
        }

        if errors
            .check(validate_required("description", &self.description))
            .is_some()
        {
            errors.check(validate_max_length(
                "description",
                &self.description,
                IDEA_DESCRIPTION_MAX_LENGTH,
            ));
        }

        let repository = non_blank(self.repository);
        if let Some(repository) = &repository {
            errors.check(validate_repository(repository, IDEA_REPOSITORY_REGEX_TEXT));
        }

        let advancement = errors.check(Advancement::parse(&self.advancement));
        let team_size = errors.check(validate_team_size(self.team_size));

        if errors.errors().len() > failed_before {
            return None;
        }

        Some(ValidatedIdea {
            title: self.title,
            description: self.description,
            repository,
            advancement: advancement?,
            team_size: team_size?,
            technology_ids: self.technology_ids,
            framework_ids: self.framework_ids,
            specialization_ids: self.specialization_ids,
            finder_ids: self.finder_ids,
        })
    }
}

/// Checks the team size fits a positive small integer.
pub fn validate_team_size(value: i32) -> Result<i16, FieldError> {
    if !(1..=TEAM_SIZE_MAX).contains(&value) {
        return Err(FieldError::new(
            "team_size",
            ErrorCode::Invalid,
            format!("Ensure this value is between 1 and {}.", TEAM_SIZE_MAX),
        ));
    }

    i16::try_from(value).map_err(|e| {
        FieldError::new("team_size", ErrorCode::Invalid, e.to_string())
    })
}

/// Experience levels an idea requires, stored as comma separated codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Advancement(Vec<Experience>);

impl Advancement {
    /// Parses a list of experience codes.
    ///
    /// Codes must be distinct and their stored form must fit in [`ADVANCEMENT_MAX_LENGTH`]
    /// characters, which allows at most two levels.
    pub fn parse<S: AsRef<str>>(codes: &[S]) -> Result<Self, FieldError> {
        let mut levels = Vec::with_capacity(codes.len());

        for code in codes {
            let level = parse_choice("advancement", code.as_ref(), Experience::from_code)?;

            if levels.contains(&level) {
                return Err(FieldError::new(
                    "advancement",
                    ErrorCode::Invalid,
                    format!("Value '{}' is selected more than once.", code.as_ref()),
                ));
            }

            levels.push(level);
        }

        let advancement = Self(levels);
        let stored = advancement.to_stored();

        if stored.len() > ADVANCEMENT_MAX_LENGTH {
            return Err(FieldError::new(
                "advancement",
                ErrorCode::MaxLength,
                format!(
                    "Ensure this value has at most {} characters (it has {}).",
                    ADVANCEMENT_MAX_LENGTH,
                    stored.len()
                ),
            ));
        }

        Ok(advancement)
    }

    /// Reads the stored column value, skipping unknown codes.
    pub fn from_stored(value: &str) -> Self {
        Self(
            value
                .split(',')
                .filter_map(Experience::from_code)
                .collect(),
        )
    }

    /// Comma separated codes as stored in the `advancement` column.
    pub fn to_stored(&self) -> String {
        self.0
            .iter()
            .map(Experience::code)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Levels in the order they were given.
    pub fn levels(&self) -> &[Experience] {
        &self.0
    }
}

/// Idea joined with the username of its founder.
///
/// Displays as `"{title} - Idea by {username} account"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaSummary {
    /// Idea ID.
    pub id: i32,
    /// Idea title.
    pub title: String,
    /// Unique slug of the idea.
    pub title_slug: String,
    /// Username of the founder account.
    pub founder_username: String,
}

impl fmt::Display for IdeaSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Idea by {} account",
            self.title, self.founder_username
        )
    }
}
