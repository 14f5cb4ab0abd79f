//! Account service.
//!
//! Registration, identity changes and profile maintenance. Registration inserts the account
//! and runs the role hooks in a single transaction so an account never exists without its
//! founder and finder records.

use chrono::{NaiveDateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{account::AccountRepository, techstack::TechStackRepository},
    error::{
        validation::{ErrorCode, FieldError, ValidationError},
        Error,
    },
    model::{
        account::{normalize_email, NewAccount, ProfileUpdate},
        db::AccountModel,
        techstack::{TechKind, TechStack, TechTerm},
    },
    service::role::RoleService,
    util::{
        time::is_recent,
        validate::{validate_email, validate_username},
    },
};

/// Message for a username used by another account.
pub const USERNAME_TAKEN_TEXT: &str = "The username is already taken.";
/// Message for an e-mail address used by another account.
pub const EMAIL_TAKEN_TEXT: &str = "A user with that e-mail already exists.";
/// Message for a username change to the current username.
pub const USERNAME_UNCHANGED_TEXT: &str = "New username cannot be old username";
/// Message for an e-mail change to the current address.
pub const EMAIL_UNCHANGED_TEXT: &str = "New email cannot be old email";

/// Service for managing accounts.
pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    /// Creates a new instance of AccountService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// The e-mail address is lowercased, then every field is validated and username and
    /// e-mail uniqueness is checked. The account is inserted and the role hooks run in one
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(AccountModel)` - Account created with its founder and finder records
    /// - `Err(Error::ValidationError)` - One or more fields failed, all failures are listed
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn register(&self, new_account: NewAccount) -> Result<AccountModel, Error> {
        let today = Utc::now().date_naive();
        let username = new_account.username;
        let email = normalize_email(&new_account.email);

        let mut errors = ValidationError::new();
        let username_valid = errors.check(validate_username(&username)).is_some();
        let email_valid = errors.check(validate_email(&email)).is_some();
        let profile = new_account.profile.validate(today, &mut errors);

        let txn = self.db.begin().await?;
        let account_repo = AccountRepository::new(&txn);

        if username_valid && account_repo.username_exists(&username).await? {
            errors.push(FieldError::new(
                "username",
                ErrorCode::Unique,
                USERNAME_TAKEN_TEXT,
            ));
        }

        if email_valid && account_repo.email_exists(&email).await? {
            errors.push(FieldError::new("email", ErrorCode::Unique, EMAIL_TAKEN_TEXT));
        }

        errors.into_result()?;

        let profile = profile.ok_or_else(|| {
            Error::InternalError("Profile validation failed without reporting errors".to_string())
        })?;

        let account = account_repo.create(username, email, profile).await?;
        RoleService::new(&txn).on_account_created(&account).await?;

        txn.commit().await?;

        tracing::info!("Registered {}", account);

        Ok(account)
    }

    /// Gets an account by its ID.
    pub async fn get_account(&self, account_id: i32) -> Result<Option<AccountModel>, Error> {
        Ok(AccountRepository::new(self.db).get_by_id(account_id).await?)
    }

    /// Finds an account by exact username.
    pub async fn get_by_username(&self, username: &str) -> Result<Option<AccountModel>, Error> {
        Ok(AccountRepository::new(self.db)
            .find_by_username(username)
            .await?)
    }

    /// Changes the username of an account.
    ///
    /// The new username must match the username pattern, differ from the current one and not
    /// be taken by any account.
    ///
    /// # Returns
    /// - `Ok(AccountModel)` - Updated account
    /// - `Err(Error::ValidationError)` - Invalid, unchanged or taken username
    /// - `Err(Error::NotFound)` - No account with the given ID
    pub async fn set_new_username(
        &self,
        account_id: i32,
        new_username: &str,
    ) -> Result<AccountModel, Error> {
        let account_repo = AccountRepository::new(self.db);
        let account = self.require_account(account_id).await?;

        validate_username(new_username).map_err(ValidationError::from)?;

        if new_username == account.username {
            return Err(ValidationError::from(FieldError::new(
                "username",
                ErrorCode::Unchanged,
                USERNAME_UNCHANGED_TEXT,
            ))
            .into());
        }

        if account_repo.username_exists(new_username).await? {
            return Err(ValidationError::from(FieldError::new(
                "username",
                ErrorCode::Unique,
                USERNAME_TAKEN_TEXT,
            ))
            .into());
        }

        let account = account_repo
            .update_username(account_id, new_username.to_string())
            .await?
            .ok_or_else(|| Error::account_not_found(account_id))?;

        tracing::debug!("Changed username of account ID {}", account_id);

        Ok(account)
    }

    /// Changes the e-mail address of an account.
    ///
    /// The address is lowercased, then it must match the e-mail pattern, differ from the
    /// current one and not be used by any account.
    pub async fn set_new_email(
        &self,
        account_id: i32,
        new_email: &str,
    ) -> Result<AccountModel, Error> {
        let account_repo = AccountRepository::new(self.db);
        let account = self.require_account(account_id).await?;

        let new_email = normalize_email(new_email);
        validate_email(&new_email).map_err(ValidationError::from)?;

        if new_email == account.email {
            return Err(ValidationError::from(FieldError::new(
                "email",
                ErrorCode::Unchanged,
                EMAIL_UNCHANGED_TEXT,
            ))
            .into());
        }

        if account_repo.email_exists(&new_email).await? {
            return Err(ValidationError::from(FieldError::new(
                "email",
                ErrorCode::Unique,
                EMAIL_TAKEN_TEXT,
            ))
            .into());
        }

        let account = account_repo
            .update_email(account_id, new_email)
            .await?
            .ok_or_else(|| Error::account_not_found(account_id))?;

        tracing::debug!("Changed e-mail of account ID {}", account_id);

        Ok(account)
    }

    /// Validates and saves the profile attributes of an account.
    pub async fn update_profile(
        &self,
        account_id: i32,
        profile: ProfileUpdate,
    ) -> Result<AccountModel, Error> {
        let mut errors = ValidationError::new();
        let profile = profile.validate(Utc::now().date_naive(), &mut errors);
        errors.into_result()?;

        let profile = profile.ok_or_else(|| {
            Error::InternalError("Profile validation failed without reporting errors".to_string())
        })?;

        AccountRepository::new(self.db)
            .update_profile(account_id, profile)
            .await?
            .ok_or_else(|| Error::account_not_found(account_id))
    }

    /// Replaces the account's terms of one taxonomy kind.
    ///
    /// # Returns
    /// - `Ok(Vec<TechTerm>)` - Terms now linked, ordered by name
    /// - `Err(Error::NotFound)` - No account with the given ID
    /// - `Err(Error::DbErr)` - A term does not exist or the database operation failed
    pub async fn set_tech_stack(
        &self,
        account_id: i32,
        kind: TechKind,
        term_ids: &[i32],
    ) -> Result<Vec<TechTerm>, Error> {
        self.require_account(account_id).await?;

        let txn = self.db.begin().await?;

        let techstack_repo = TechStackRepository::new(&txn);
        techstack_repo
            .replace_account_links(account_id, kind, term_ids)
            .await?;
        let terms = techstack_repo.account_terms(account_id, kind).await?;

        txn.commit().await?;

        Ok(terms)
    }

    /// Gets every taxonomy term linked to the account.
    pub async fn get_tech_stack(&self, account_id: i32) -> Result<TechStack, Error> {
        let techstack_repo = TechStackRepository::new(self.db);

        Ok(TechStack {
            technologies: techstack_repo
                .account_terms(account_id, TechKind::Technology)
                .await?,
            frameworks: techstack_repo
                .account_terms(account_id, TechKind::Framework)
                .await?,
            specializations: techstack_repo
                .account_terms(account_id, TechKind::Specialization)
                .await?,
        })
    }

    /// Marks the account as having confirmed its e-mail address.
    pub async fn verify_account(&self, account_id: i32) -> Result<AccountModel, Error> {
        let account = AccountRepository::new(self.db)
            .set_verified(account_id, true)
            .await?
            .ok_or_else(|| Error::account_not_found(account_id))?;

        tracing::info!("Verified {}", account);

        Ok(account)
    }

    /// Sets the last seen timestamp to now.
    pub async fn touch_last_seen(&self, account_id: i32) -> Result<AccountModel, Error> {
        AccountRepository::new(self.db)
            .touch_last_seen(account_id)
            .await?
            .ok_or_else(|| Error::account_not_found(account_id))
    }

    /// Deletes an account along with its roles, ideas and links.
    ///
    /// # Returns
    /// - `Ok(true)` - The account was deleted
    /// - `Ok(false)` - No account with the given ID
    pub async fn delete_account(&self, account_id: i32) -> Result<bool, Error> {
        let result = AccountRepository::new(self.db).delete(account_id).await?;

        if result.rows_affected > 0 {
            tracing::info!("Deleted account ID {}", account_id);
        }

        Ok(result.rows_affected > 0)
    }

    /// Returns true if the account joined within the last 7 days of `now`.
    pub fn has_recently_joined(account: &AccountModel, now: NaiveDateTime) -> bool {
        is_recent(account.date_joined, now)
    }

    async fn require_account(&self, account_id: i32) -> Result<AccountModel, Error> {
        AccountRepository::new(self.db)
            .get_by_id(account_id)
            .await?
            .ok_or_else(|| Error::account_not_found(account_id))
    }
}
