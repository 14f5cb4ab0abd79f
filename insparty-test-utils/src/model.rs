//! Database model type aliases used by fixtures and factories.

pub type AccountModel = entity::account::Model;
pub type FounderModel = entity::founder::Model;
pub type FinderModel = entity::finder::Model;
pub type IdeaModel = entity::idea::Model;
pub type IdeaFinderModel = entity::idea_finder::Model;
pub type TechnologyModel = entity::technology::Model;
pub type FrameworkModel = entity::framework::Model;
pub type SpecializationModel = entity::specialization::Model;
