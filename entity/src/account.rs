use std::fmt;

use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{Experience, Sex};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, column_type = "String(StringLen::N(30))")]
    pub username: String,
    #[sea_orm(unique, column_type = "String(StringLen::N(254))")]
    pub email: String,
    #[sea_orm(column_type = "String(StringLen::N(30))")]
    pub firstname: String,
    #[sea_orm(column_type = "String(StringLen::N(30))")]
    pub lastname: String,
    #[sea_orm(column_type = "String(StringLen::N(12))", nullable)]
    pub phone: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(80))", nullable)]
    pub linkedin: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(80))", nullable)]
    pub repository: Option<String>,
    pub experience: Option<Experience>,
    pub sex: Option<Sex>,
    pub birthdate: Option<Date>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub is_staff: bool,
    pub is_active: bool,
    #[sea_orm(indexed)]
    pub is_verified: bool,
    pub date_joined: DateTime,
    #[sea_orm(indexed)]
    pub last_seen: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::founder::Entity")]
    Founder,
    #[sea_orm(has_one = "super::finder::Entity")]
    Finder,
    #[sea_orm(has_many = "super::idea::Entity")]
    Idea,
    #[sea_orm(has_many = "super::idea_finder::Entity")]
    IdeaFinder,
    #[sea_orm(has_many = "super::account_technology::Entity")]
    AccountTechnology,
    #[sea_orm(has_many = "super::account_framework::Entity")]
    AccountFramework,
    #[sea_orm(has_many = "super::account_specialization::Entity")]
    AccountSpecialization,
}

impl Related<super::founder::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Founder.def()
    }
}

impl Related<super::finder::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Finder.def()
    }
}

impl Related<super::idea::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Idea.def()
    }
}

impl Related<super::idea_finder::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IdeaFinder.def()
    }
}

impl Related<super::technology::Entity> for Entity {
    fn to() -> RelationDef {
        super::account_technology::Relation::Technology.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::account_technology::Relation::Account.def().rev())
    }
}

impl Related<super::framework::Entity> for Entity {
    fn to() -> RelationDef {
        super::account_framework::Relation::Framework.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::account_framework::Relation::Account.def().rev())
    }
}

impl Related<super::specialization::Entity> for Entity {
    fn to() -> RelationDef {
        super::account_specialization::Relation::Specialization.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::account_specialization::Relation::Account.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} account", self.username)
    }
}
