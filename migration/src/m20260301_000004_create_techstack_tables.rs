use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Technology::Table)
                    .if_not_exists()
                    .col(pk_auto(Technology::Id))
                    .col(string_len_uniq(Technology::Name, 50))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Framework::Table)
                    .if_not_exists()
                    .col(pk_auto(Framework::Id))
                    .col(string_len_uniq(Framework::Name, 50))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Specialization::Table)
                    .if_not_exists()
                    .col(pk_auto(Specialization::Id))
                    .col(string_len_uniq(Specialization::Name, 50))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Specialization::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Framework::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Technology::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Technology {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Framework {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Specialization {
    Table,
    Id,
    Name,
}
