use sea_orm_migration::{prelude::*, schema::*};

static IDX_ACCOUNT_IS_VERIFIED: &str = "idx_account_is_verified";
static IDX_ACCOUNT_LAST_SEEN: &str = "idx_account_last_seen";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(pk_auto(Account::Id))
                    .col(string_len_uniq(Account::Username, 30))
                    .col(string_len_uniq(Account::Email, 254))
                    .col(string_len(Account::Firstname, 30))
                    .col(string_len(Account::Lastname, 30))
                    .col(string_len_null(Account::Phone, 12))
                    .col(string_len_null(Account::Linkedin, 80))
                    .col(string_len_null(Account::Repository, 80))
                    .col(string_len_null(Account::Experience, 4))
                    .col(string_len_null(Account::Sex, 4))
                    .col(date_null(Account::Birthdate))
                    .col(text(Account::Description))
                    .col(boolean(Account::IsStaff).default(false))
                    .col(boolean(Account::IsActive).default(true))
                    .col(boolean(Account::IsVerified).default(false))
                    .col(timestamp(Account::DateJoined))
                    .col(timestamp(Account::LastSeen))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACCOUNT_IS_VERIFIED)
                    .table(Account::Table)
                    .col(Account::IsVerified)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACCOUNT_LAST_SEEN)
                    .table(Account::Table)
                    .col(Account::LastSeen)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACCOUNT_LAST_SEEN)
                    .table(Account::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACCOUNT_IS_VERIFIED)
                    .table(Account::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Account {
    Table,
    Id,
    Username,
    Email,
    Firstname,
    Lastname,
    Phone,
    Linkedin,
    Repository,
    Experience,
    Sex,
    Birthdate,
    Description,
    IsStaff,
    IsActive,
    IsVerified,
    DateJoined,
    LastSeen,
}
