use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Overall programming experience of an account, also used to gauge the
/// experience an idea requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(4))")]
pub enum Experience {
    #[sea_orm(string_value = "N")]
    Novice,
    #[sea_orm(string_value = "J")]
    Junior,
    #[sea_orm(string_value = "R")]
    Regular,
    #[sea_orm(string_value = "S")]
    Senior,
    #[sea_orm(string_value = "E")]
    Expert,
}

impl Experience {
    /// Parses a single stored choice code such as `"N"`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(Self::Novice),
            "J" => Some(Self::Junior),
            "R" => Some(Self::Regular),
            "S" => Some(Self::Senior),
            "E" => Some(Self::Expert),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Novice => "N",
            Self::Junior => "J",
            Self::Regular => "R",
            Self::Senior => "S",
            Self::Expert => "E",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Novice => "Novice (little to no experience)",
            Self::Junior => "Junior (base experience)",
            Self::Regular => "Regular (significant experience)",
            Self::Senior => "Senior (high experience)",
            Self::Expert => "Expert (superior experience)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(4))")]
pub enum Sex {
    #[sea_orm(string_value = "M")]
    Male,
    #[sea_orm(string_value = "F")]
    Female,
    #[sea_orm(string_value = "O")]
    Other,
    #[sea_orm(string_value = "P")]
    PreferNot,
}

impl Sex {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Self::Male),
            "F" => Some(Self::Female),
            "O" => Some(Self::Other),
            "P" => Some(Self::PreferNot),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
            Self::PreferNot => "Prefer Not To Say",
        }
    }
}

/// Recruitment status of an idea.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(4))")]
pub enum IdeaStatus {
    #[default]
    #[sea_orm(string_value = "O")]
    Open,
    #[sea_orm(string_value = "S")]
    Suspended,
    #[sea_orm(string_value = "C")]
    Closed,
}

impl IdeaStatus {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "O" => Some(Self::Open),
            "S" => Some(Self::Suspended),
            "C" => Some(Self::Closed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Recruitment open",
            Self::Suspended => "Recruitment suspended",
            Self::Closed => "Recruitment closed",
        }
    }
}
