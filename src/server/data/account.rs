//! Account persistence.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
};

use crate::server::model::{account::ValidatedProfile, db::AccountModel};

/// Repository for account records
pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new instance of [`AccountRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new account
    ///
    /// `date_joined` and `last_seen` are both set to the current time. Username and email
    /// uniqueness is enforced by the database, a duplicate returns a [`DbErr`].
    pub async fn create(
        &self,
        username: String,
        email: String,
        profile: ValidatedProfile,
    ) -> Result<AccountModel, DbErr> {
        let now = Utc::now().naive_utc();

        let mut account = entity::account::ActiveModel {
            username: ActiveValue::Set(username),
            email: ActiveValue::Set(email),
            is_staff: ActiveValue::Set(false),
            is_active: ActiveValue::Set(true),
            is_verified: ActiveValue::Set(false),
            date_joined: ActiveValue::Set(now),
            last_seen: ActiveValue::Set(now),
            ..Default::default()
        };
        apply_profile(&mut account, profile);

        account.insert(self.db).await
    }

    /// Gets an account by its ID
    pub async fn get_by_id(&self, account_id: i32) -> Result<Option<AccountModel>, DbErr> {
        entity::prelude::Account::find_by_id(account_id)
            .one(self.db)
            .await
    }

    /// Finds an account by exact username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<AccountModel>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Finds an account by exact e-mail address
    pub async fn find_by_email(&self, email: &str) -> Result<Option<AccountModel>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Returns true if an account uses the username
    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Account::find()
            .filter(entity::account::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns true if an account uses the e-mail address
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Sets a new username, returns `None` if the account doesn't exist
    pub async fn update_username(
        &self,
        account_id: i32,
        new_username: String,
    ) -> Result<Option<AccountModel>, DbErr> {
        self.update_with(account_id, |account| {
            account.username = ActiveValue::Set(new_username);
        })
        .await
    }

    /// Sets a new e-mail address, returns `None` if the account doesn't exist
    pub async fn update_email(
        &self,
        account_id: i32,
        new_email: String,
    ) -> Result<Option<AccountModel>, DbErr> {
        self.update_with(account_id, |account| {
            account.email = ActiveValue::Set(new_email);
        })
        .await
    }

    /// Saves validated profile attributes, returns `None` if the account doesn't exist
    pub async fn update_profile(
        &self,
        account_id: i32,
        profile: ValidatedProfile,
    ) -> Result<Option<AccountModel>, DbErr> {
        self.update_with(account_id, |account| apply_profile(account, profile))
            .await
    }

    /// Sets the verification flag, returns `None` if the account doesn't exist
    pub async fn set_verified(
        &self,
        account_id: i32,
        is_verified: bool,
    ) -> Result<Option<AccountModel>, DbErr> {
        self.update_with(account_id, |account| {
            account.is_verified = ActiveValue::Set(is_verified);
        })
        .await
    }

    /// Refreshes `last_seen` without changing anything else
    pub async fn touch_last_seen(&self, account_id: i32) -> Result<Option<AccountModel>, DbErr> {
        self.update_with(account_id, |_| {}).await
    }

    /// Deletes an account
    ///
    /// Role records, ideas founded by the account and all links cascade. Returns OK regardless
    /// of the account existing, to confirm the deletion result check the
    /// [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, account_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Account::delete_by_id(account_id)
            .exec(self.db)
            .await
    }

    /// Applies `change` to the account and saves it with a fresh `last_seen`
    ///
    /// Returns `None` if the account does not exist.
    async fn update_with<F>(&self, account_id: i32, change: F) -> Result<Option<AccountModel>, DbErr>
    where
        F: FnOnce(&mut entity::account::ActiveModel),
    {
        let account = match entity::prelude::Account::find_by_id(account_id)
            .one(self.db)
            .await?
        {
            Some(account) => account,
            None => return Ok(None),
        };

        let mut account_am = account.into_active_model();
        change(&mut account_am);
        account_am.last_seen = ActiveValue::Set(Utc::now().naive_utc());

        let account = account_am.update(self.db).await?;

        Ok(Some(account))
    }
}

fn apply_profile(account: &mut entity::account::ActiveModel, profile: ValidatedProfile) {
    account.firstname = ActiveValue::Set(profile.firstname);
    account.lastname = ActiveValue::Set(profile.lastname);
    account.phone = ActiveValue::Set(profile.phone);
    account.linkedin = ActiveValue::Set(profile.linkedin);
    account.repository = ActiveValue::Set(profile.repository);
    account.experience = ActiveValue::Set(profile.experience);
    account.sex = ActiveValue::Set(profile.sex);
    account.birthdate = ActiveValue::Set(profile.birthdate);
    account.description = ActiveValue::Set(profile.description);
}
