//! SeaORM entities for accounts, ideas, roles and the technology taxonomy.

pub mod prelude;

pub mod account;
pub mod account_framework;
pub mod account_specialization;
pub mod account_technology;
pub mod finder;
pub mod founder;
pub mod framework;
pub mod idea;
pub mod idea_finder;
pub mod idea_framework;
pub mod idea_specialization;
pub mod idea_technology;
pub mod sea_orm_active_enums;
pub mod specialization;
pub mod technology;
