//! Account and role fixture utilities.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{AccountModel, FinderModel, FounderModel},
    TestContext,
};

impl TestContext {
    pub fn account<'a>(&'a self) -> AccountFixtures<'a> {
        AccountFixtures { setup: self }
    }
}

pub struct AccountFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> AccountFixtures<'a> {
    /// Insert an account without role records.
    ///
    /// The e-mail address is `{username}@example.com`, every other field is blank or default.
    pub async fn insert_account(&self, username: &str) -> Result<AccountModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Account::insert(entity::account::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                email: ActiveValue::Set(format!("{}@example.com", username)),
                firstname: ActiveValue::Set(String::new()),
                lastname: ActiveValue::Set(String::new()),
                phone: ActiveValue::Set(None),
                linkedin: ActiveValue::Set(None),
                repository: ActiveValue::Set(None),
                experience: ActiveValue::Set(None),
                sex: ActiveValue::Set(None),
                birthdate: ActiveValue::Set(None),
                description: ActiveValue::Set(String::new()),
                is_staff: ActiveValue::Set(false),
                is_active: ActiveValue::Set(true),
                is_verified: ActiveValue::Set(false),
                date_joined: ActiveValue::Set(now),
                last_seen: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_founder(&self, account_id: i32) -> Result<FounderModel, TestError> {
        Ok(
            entity::prelude::Founder::insert(entity::founder::ActiveModel {
                account_id: ActiveValue::Set(account_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_finder(&self, account_id: i32) -> Result<FinderModel, TestError> {
        Ok(
            entity::prelude::Finder::insert(entity::finder::ActiveModel {
                account_id: ActiveValue::Set(account_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an account together with its founder and finder records, the way registration
    /// stores them.
    pub async fn insert_account_with_roles(
        &self,
        username: &str,
    ) -> Result<(AccountModel, FounderModel, FinderModel), TestError> {
        let account = self.insert_account(username).await?;
        let founder = self.insert_founder(account.id).await?;
        let finder = self.insert_finder(account.id).await?;

        Ok((account, founder, finder))
    }
}
