use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000001_create_account_table::Account,
    m20260301_000004_create_techstack_tables::{Framework, Specialization, Technology},
};

static FK_ACCOUNT_TECHNOLOGY_ACCOUNT_ID: &str = "fk_account_technology_account_id";
static FK_ACCOUNT_TECHNOLOGY_TECHNOLOGY_ID: &str = "fk_account_technology_technology_id";
static FK_ACCOUNT_FRAMEWORK_ACCOUNT_ID: &str = "fk_account_framework_account_id";
static FK_ACCOUNT_FRAMEWORK_FRAMEWORK_ID: &str = "fk_account_framework_framework_id";
static FK_ACCOUNT_SPECIALIZATION_ACCOUNT_ID: &str = "fk_account_specialization_account_id";
static FK_ACCOUNT_SPECIALIZATION_SPECIALIZATION_ID: &str = "fk_account_specialization_specialization_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccountTechnology::Table)
                    .if_not_exists()
                    .col(integer(AccountTechnology::AccountId))
                    .col(integer(AccountTechnology::TechnologyId))
                    .primary_key(
                        Index::create()
                            .col(AccountTechnology::AccountId)
                            .col(AccountTechnology::TechnologyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ACCOUNT_TECHNOLOGY_ACCOUNT_ID)
                            .from(AccountTechnology::Table, AccountTechnology::AccountId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ACCOUNT_TECHNOLOGY_TECHNOLOGY_ID)
                            .from(AccountTechnology::Table, AccountTechnology::TechnologyId)
                            .to(Technology::Table, Technology::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AccountFramework::Table)
                    .if_not_exists()
                    .col(integer(AccountFramework::AccountId))
                    .col(integer(AccountFramework::FrameworkId))
                    .primary_key(
                        Index::create()
                            .col(AccountFramework::AccountId)
                            .col(AccountFramework::FrameworkId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ACCOUNT_FRAMEWORK_ACCOUNT_ID)
                            .from(AccountFramework::Table, AccountFramework::AccountId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ACCOUNT_FRAMEWORK_FRAMEWORK_ID)
                            .from(AccountFramework::Table, AccountFramework::FrameworkId)
                            .to(Framework::Table, Framework::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AccountSpecialization::Table)
                    .if_not_exists()
                    .col(integer(AccountSpecialization::AccountId))
                    .col(integer(AccountSpecialization::SpecializationId))
                    .primary_key(
                        Index::create()
                            .col(AccountSpecialization::AccountId)
                            .col(AccountSpecialization::SpecializationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ACCOUNT_SPECIALIZATION_ACCOUNT_ID)
                            .from(AccountSpecialization::Table, AccountSpecialization::AccountId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ACCOUNT_SPECIALIZATION_SPECIALIZATION_ID)
                            .from(AccountSpecialization::Table, AccountSpecialization::SpecializationId)
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
            .drop_table(Table::drop().table(AccountSpecialization::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AccountFramework::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AccountTechnology::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AccountTechnology {
    Table,
    AccountId,
    TechnologyId,
}

#[derive(DeriveIden)]
enum AccountFramework {
    Table,
    AccountId,
    FrameworkId,
}

#[derive(DeriveIden)]
enum AccountSpecialization {
    Table,
    AccountId,
    SpecializationId,
}
