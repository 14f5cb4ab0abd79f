use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_create_account_table::Account;

static FK_FINDER_ACCOUNT_ID: &str = "fk_finder_account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Finder::Table)
                    .if_not_exists()
                    .col(pk_auto(Finder::Id))
                    .col(integer_uniq(Finder::AccountId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FINDER_ACCOUNT_ID)
                    .from_tbl(Finder::Table)
                    .from_col(Finder::AccountId)
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
                    .name(FK_FINDER_ACCOUNT_ID)
                    .table(Finder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Finder::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Finder {
    Table,
    Id,
    AccountId,
}
