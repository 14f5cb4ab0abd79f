//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate used throughout services and
//! repositories.

/// Registered account.
///
/// # Fields (from `entity::account::Model`)
/// - `id` - Primary key
/// - `username` - Unique login name, word characters only
/// - `email` - Unique lowercased e-mail address
/// - `is_verified` - Whether the account confirmed its e-mail address
/// - `date_joined` - Timestamp of registration, never edited
/// - `last_seen` - Timestamp refreshed on every save
pub type AccountModel = entity::account::Model;

/// Founder role record, one per account.
pub type FounderModel = entity::founder::Model;

/// Finder role record, one per account.
pub type FinderModel = entity::finder::Model;

/// Project proposal created by a founder.
///
/// # Fields (from `entity::idea::Model`)
/// - `id` - Primary key
/// - `title` - Human readable title
/// - `title_slug` - Unique slug generated from the title
/// - `founder_id` - Account that owns the idea
/// - `advancement` - Comma separated experience codes
/// - `status` - Recruitment status
/// - `team_size` - Planned number of team members
pub type IdeaModel = entity::idea::Model;

/// Technology taxonomy term.
pub type TechnologyModel = entity::technology::Model;
/// Framework taxonomy term.
pub type FrameworkModel = entity::framework::Model;
/// Specialization taxonomy term.
pub type SpecializationModel = entity::specialization::Model;
