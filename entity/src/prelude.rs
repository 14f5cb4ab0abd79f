pub use super::account::Entity as Account;
pub use super::account_framework::Entity as AccountFramework;
pub use super::account_specialization::Entity as AccountSpecialization;
pub use super::account_technology::Entity as AccountTechnology;
pub use super::finder::Entity as Finder;
pub use super::founder::Entity as Founder;
pub use super::framework::Entity as Framework;
pub use super::idea::Entity as Idea;
pub use super::idea_finder::Entity as IdeaFinder;
pub use super::idea_framework::Entity as IdeaFramework;
pub use super::idea_specialization::Entity as IdeaSpecialization;
pub use super::idea_technology::Entity as IdeaTechnology;
pub use super::specialization::Entity as Specialization;
pub use super::technology::Entity as Technology;
