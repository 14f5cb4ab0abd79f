use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_create_account_table::Account;

static IDX_IDEA_FOUNDER_ID: &str = "idx_idea_founder_id";
static FK_IDEA_FOUNDER_ID: &str = "fk_idea_founder_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Idea::Table)
                    .if_not_exists()
                    .col(pk_auto(Idea::Id))
                    .col(string_len(Idea::Title, 200))
                    .col(string_len_uniq(Idea::TitleSlug, 50))
                    .col(integer(Idea::FounderId))
                    .col(string_len(Idea::Advancement, 4).default(""))
                    .col(string_len_null(Idea::Repository, 80))
                    .col(text(Idea::Description))
                    .col(timestamp(Idea::DateCreated))
                    .col(string_len(Idea::Status, 4).default("O"))
                    .col(small_integer(Idea::TeamSize))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_IDEA_FOUNDER_ID)
                    .table(Idea::Table)
                    .col(Idea::FounderId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_IDEA_FOUNDER_ID)
                    .from_tbl(Idea::Table)
                    .from_col(Idea::FounderId)
                    .to_tbl(Account::Table)
                    .to_col(Account::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_IDEA_FOUNDER_ID)
                    .table(Idea::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_IDEA_FOUNDER_ID)
                    .table(Idea::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Idea::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Idea {
    Table,
    Id,
    Title,
    TitleSlug,
    FounderId,
    Advancement,
    Repository,
    Description,
    DateCreated,
    Status,
    TeamSize,
}
