use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000006_create_idea_table::Idea,
    m20260301_000004_create_techstack_tables::{Framework, Specialization, Technology},
};

static FK_IDEA_TECHNOLOGY_IDEA_ID: &str = "fk_idea_technology_idea_id";
static FK_IDEA_TECHNOLOGY_TECHNOLOGY_ID: &str = "fk_idea_technology_technology_id";
static FK_IDEA_FRAMEWORK_IDEA_ID: &str = "fk_idea_framework_idea_id";
static FK_IDEA_FRAMEWORK_FRAMEWORK_ID: &str = "fk_idea_framework_framework_id";
static FK_IDEA_SPECIALIZATION_IDEA_ID: &str = "fk_idea_specialization_idea_id";
static FK_IDEA_SPECIALIZATION_SPECIALIZATION_ID: &str = "fk_idea_specialization_specialization_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IdeaTechnology::Table)
                    .if_not_exists()
                    .col(integer(IdeaTechnology::IdeaId))
                    .col(integer(IdeaTechnology::TechnologyId))
                    .primary_key(
                        Index::create()
                            .col(IdeaTechnology::IdeaId)
                            .col(IdeaTechnology::TechnologyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_IDEA_TECHNOLOGY_IDEA_ID)
                            .from(IdeaTechnology::Table, IdeaTechnology::IdeaId)
                            .to(Idea::Table, Idea::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_IDEA_TECHNOLOGY_TECHNOLOGY_ID)
                            .from(IdeaTechnology::Table, IdeaTechnology::TechnologyId)
                            .to(Technology::Table, Technology::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(IdeaFramework::Table)
                    .if_not_exists()
                    .col(integer(IdeaFramework::IdeaId))
                    .col(integer(IdeaFramework::FrameworkId))
                    .primary_key(
                        Index::create()
                            .col(IdeaFramework::IdeaId)
                            .col(IdeaFramework::FrameworkId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_IDEA_FRAMEWORK_IDEA_ID)
                            .from(IdeaFramework::Table, IdeaFramework::IdeaId)
                            .to(Idea::Table, Idea::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_IDEA_FRAMEWORK_FRAMEWORK_ID)
                            .from(IdeaFramework::Table, IdeaFramework::FrameworkId)
                            .to(Framework::Table, Framework::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(IdeaSpecialization::Table)
                    .if_not_exists()
                    .col(integer(IdeaSpecialization::IdeaId))
                    .col(integer(IdeaSpecialization::SpecializationId))
                    .primary_key(
                        Index::create()
                            .col(IdeaSpecialization::IdeaId)
                            .col(IdeaSpecialization::SpecializationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_IDEA_SPECIALIZATION_IDEA_ID)
                            .from(IdeaSpecialization::Table, IdeaSpecialization::IdeaId)
                            .to(Idea::Table, Idea::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_IDEA_SPECIALIZATION_SPECIALIZATION_ID)
                            .from(IdeaSpecialization::Table, IdeaSpecialization::SpecializationId)
                            .to(Specialization::Table, Specialization::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(IdeaSpecialization::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(IdeaFramework::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(IdeaTechnology::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum IdeaTechnology {
    Table,
    IdeaId,
    TechnologyId,
}

#[derive(DeriveIden)]
enum IdeaFramework {
    Table,
    IdeaId,
    FrameworkId,
}

#[derive(DeriveIden)]
enum IdeaSpecialization {
    Table,
    IdeaId,
    SpecializationId,
}
