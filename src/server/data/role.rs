//! Founder and Finder persistence.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::db::{AccountModel, FinderModel, FounderModel};

/// Founder and Finder records, one of each per account
pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    /// Creates a new instance of [`RoleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the founder record of an account
    ///
    /// Fails with a [`DbErr`] if the account already has one.
    pub async fn create_founder(&self, account_id: i32) -> Result<FounderModel, DbErr> {
        let founder = entity::founder::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            ..Default::default()
        };

        founder.insert(self.db).await
    }

    /// Creates the finder record of an account
    ///
    /// Fails with a [`DbErr`] if the account already has one.
    pub async fn create_finder(&self, account_id: i32) -> Result<FinderModel, DbErr> {
        let finder = entity::finder::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            ..Default::default()
        };

        finder.insert(self.db).await
    }

    /// Gets the founder record of an account with the account itself
    pub async fn get_founder_by_account(
        &self,
        account_id: i32,
    ) -> Result<Option<(FounderModel, Option<AccountModel>)>, DbErr> {
        entity::prelude::Founder::find()
            .filter(entity::founder::Column::AccountId.eq(account_id))
            .find_also_related(entity::account::Entity)
            .one(self.db)
            .await
    }

    /// Gets the finder record of an account with the account itself
    pub async fn get_finder_by_account(
        &self,
        account_id: i32,
    ) -> Result<Option<(FinderModel, Option<AccountModel>)>, DbErr> {
        entity::prelude::Finder::find()
            .filter(entity::finder::Column::AccountId.eq(account_id))
            .find_also_related(entity::account::Entity)
            .one(self.db)
            .await
    }
}
