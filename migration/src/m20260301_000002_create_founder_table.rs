use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_create_account_table::Account;

static FK_FOUNDER_ACCOUNT_ID: &str = "fk_founder_account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Founder::Table)
                    .if_not_exists()
                    .col(pk_auto(Founder::Id))
                    .col(integer_uniq(Founder::AccountId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FOUNDER_ACCOUNT_ID)
                    .from_tbl(Founder::Table)
                    .from_col(Founder::AccountId)
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
                    .name(FK_FOUNDER_ACCOUNT_ID)
                    .table(Founder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Founder::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Founder {
    Table,
    Id,
    AccountId,
}
