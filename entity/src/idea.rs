use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::IdeaStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "idea")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub title: String,
    #[sea_orm(unique, indexed, column_type = "String(StringLen::N(50))")]
    pub title_slug: String,
    pub founder_id: i32,
    /// Comma separated [`Experience`](super::sea_orm_active_enums::Experience) codes
    #[sea_orm(column_type = "String(StringLen::N(4))")]
    pub advancement: String,
    #[sea_orm(column_type = "String(StringLen::N(80))", nullable)]
    pub repository: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub date_created: DateTime,
    pub status: IdeaStatus,
    pub team_size: i16,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::FounderId",
        to = "super::account::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Founder,
    #[sea_orm(has_many = "super::idea_finder::Entity")]
    IdeaFinder,
    #[sea_orm(has_many = "super::idea_technology::Entity")]
    IdeaTechnology,
    #[sea_orm(has_many = "super::idea_framework::Entity")]
    IdeaFramework,
    #[sea_orm(has_many = "super::idea_specialization::Entity")]
    IdeaSpecialization,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Founder.def()
    }
}

impl Related<super::idea_finder::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IdeaFinder.def()
    }
}

impl Related<super::technology::Entity> for Entity {
    fn to() -> RelationDef {
        super::idea_technology::Relation::Technology.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::idea_technology::Relation::Idea.def().rev())
    }
}

impl Related<super::framework::Entity> for Entity {
    fn to() -> RelationDef {
        super::idea_framework::Relation::Framework.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::idea_framework::Relation::Idea.def().rev())
    }
}

impl Related<super::specialization::Entity> for Entity {
    fn to() -> RelationDef {
        super::idea_specialization::Relation::Specialization.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::idea_specialization::Relation::Idea.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
