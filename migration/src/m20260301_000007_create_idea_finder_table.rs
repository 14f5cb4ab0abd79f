use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000001_create_account_table::Account, m20260301_000006_create_idea_table::Idea,
};

static IDX_IDEA_FINDER_ACCOUNT_ID: &str = "idx_idea_finder_account_id";
static FK_IDEA_FINDER_IDEA_ID: &str = "fk_idea_finder_idea_id";
static FK_IDEA_FINDER_ACCOUNT_ID: &str = "fk_idea_finder_account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IdeaFinder::Table)
                    .if_not_exists()
                    .col(integer(IdeaFinder::IdeaId))
                    .col(integer(IdeaFinder::AccountId))
                    .primary_key(
                        Index::create()
                            .col(IdeaFinder::IdeaId)
                            .col(IdeaFinder::AccountId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_IDEA_FINDER_IDEA_ID)
                            .from(IdeaFinder::Table, IdeaFinder::IdeaId)
                            .to(Idea::Table, Idea::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_IDEA_FINDER_ACCOUNT_ID)
                            .from(IdeaFinder::Table, IdeaFinder::AccountId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_IDEA_FINDER_ACCOUNT_ID)
                    .table(IdeaFinder::Table)
                    .col(IdeaFinder::AccountId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_IDEA_FINDER_ACCOUNT_ID)
                    .table(IdeaFinder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(IdeaFinder::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum IdeaFinder {
    Table,
    IdeaId,
    AccountId,
}
