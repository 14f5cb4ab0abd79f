//! Technology taxonomy views.
//!
//! Technologies, frameworks and specializations are stored in three tables with identical
//! shape. [`TechKind`] selects the table and [`TechTerm`] is the kind-agnostic view of a row.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::server::model::db::{FrameworkModel, SpecializationModel, TechnologyModel};

/// Maximum length of a taxonomy term name.
pub const TERM_NAME_MAX_LENGTH: usize = 50;

/// Taxonomy a term belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechKind {
    /// Programming languages and platforms.
    Technology,
    /// Frameworks and libraries.
    Framework,
    /// Areas of expertise.
    Specialization,
}

impl TechKind {
    /// Every kind, in display order.
    pub const ALL: [TechKind; 3] = [Self::Technology, Self::Framework, Self::Specialization];
}

impl fmt::Display for TechKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Technology => "Technology",
            Self::Framework => "Framework",
            Self::Specialization => "Specialization",
        };

        f.write_str(name)
    }
}

/// A single taxonomy term of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechTerm {
    /// Primary key within its kind's table.
    pub id: i32,
    /// Taxonomy of the term.
    pub kind: TechKind,
    /// Unique name within the kind.
    pub name: String,
}

impl fmt::Display for TechTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<TechnologyModel> for TechTerm {
    fn from(model: TechnologyModel) -> Self {
        Self {
            id: model.id,
            kind: TechKind::Technology,
            name: model.name,
        }
    }
}

impl From<FrameworkModel> for TechTerm {
    fn from(model: FrameworkModel) -> Self {
        Self {
            id: model.id,
            kind: TechKind::Framework,
            name: model.name,
        }
    }
}

impl From<SpecializationModel> for TechTerm {
    fn from(model: SpecializationModel) -> Self {
        Self {
            id: model.id,
            kind: TechKind::Specialization,
            name: model.name,
        }
    }
}

/// Taxonomy terms linked to an account or an idea, each list ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStack {
    /// Technology terms, ordered by name.
    pub technologies: Vec<TechTerm>,
    /// Framework terms, ordered by name.
    pub frameworks: Vec<TechTerm>,
    /// Specialization terms, ordered by name.
    pub specializations: Vec<TechTerm>,
}

impl TechStack {
    /// Terms of one kind.
    pub fn terms(&self, kind: TechKind) -> &[TechTerm] {
        match kind {
            TechKind::Technology => &self.technologies,
            TechKind::Framework => &self.frameworks,
            TechKind::Specialization => &self.specializations,
        }
    }

    /// Returns true if no term of any kind is linked.
    pub fn is_empty(&self) -> bool {
        TechKind::ALL.iter().all(|kind| self.terms(*kind).is_empty())
    }
}
