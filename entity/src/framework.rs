use std::fmt;

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "framework")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, column_type = "String(StringLen::N(50))")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::account_framework::Entity")]
    AccountFramework,
    #[sea_orm(has_many = "super::idea_framework::Entity")]
    IdeaFramework,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        super::account_framework::Relation::Account.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::account_framework::Relation::Framework.def().rev())
    }
}

impl Related<super::idea::Entity> for Entity {
    fn to() -> RelationDef {
        super::idea_framework::Relation::Idea.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::idea_framework::Relation::Framework.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
