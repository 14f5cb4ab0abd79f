//! Founder and Finder role provisioning.
//!
//! Every account owns exactly one founder and one finder record. Both are created by the hooks
//! run from [`RoleService::on_account_created`] inside the registration transaction.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::role::RoleRepository,
    error::Error,
    model::{
        db::{AccountModel, FinderModel, FounderModel},
        role::{AccountRole, AccountRoles, RoleKind},
    },
};

/// Service for role records, generic over the connection so it can run in a transaction.
pub struct RoleService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleService<'a, C> {
    /// Creates a new instance of RoleService.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Runs the account creation hooks in order: founder first, then finder.
    ///
    /// Call with the transaction that inserted the account so a failing hook rolls back the
    /// whole registration.
    ///
    /// # Returns
    /// - `Ok((FounderModel, FinderModel))` - Both role records created
    /// - `Err(Error::DbErr)` - The account already has a role record or doesn't exist
    pub async fn on_account_created(
        &self,
        account: &AccountModel,
    ) -> Result<(FounderModel, FinderModel), Error> {
        let founder = self.create_founder(account).await?;
        let finder = self.create_finder(account).await?;

        Ok((founder, finder))
    }

    /// Creates the founder record of an account.
    pub async fn create_founder(&self, account: &AccountModel) -> Result<FounderModel, Error> {
        let founder = RoleRepository::new(self.db)
            .create_founder(account.id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create founder for {}: {:?}", account, e);
                e
            })?;

        tracing::debug!("Created founder {} for {}", founder.id, account);

        Ok(founder)
    }

    /// Creates the finder record of an account.
    pub async fn create_finder(&self, account: &AccountModel) -> Result<FinderModel, Error> {
        let finder = RoleRepository::new(self.db)
            .create_finder(account.id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create finder for {}: {:?}", account, e);
                e
            })?;

        tracing::debug!("Created finder {} for {}", finder.id, account);

        Ok(finder)
    }

    /// Retrieves both roles of an account with its username for display.
    ///
    /// # Returns
    /// - `Ok(Some(AccountRoles))` - Founder and finder found
    /// - `Ok(None)` - The account has no role records
    /// - `Err(Error::InternalError)` - Only one of the records exists
    pub async fn get_roles(&self, account_id: i32) -> Result<Option<AccountRoles>, Error> {
        let role_repo = RoleRepository::new(self.db);

        let founder = role_repo.get_founder_by_account(account_id).await?;
        let finder = role_repo.get_finder_by_account(account_id).await?;

        match (founder, finder) {
            (None, None) => Ok(None),
            (Some((founder, Some(account))), Some((finder, _))) => Ok(Some(AccountRoles {
                founder: AccountRole {
                    id: founder.id,
                    kind: RoleKind::Founder,
                    account_id,
                    username: account.username.clone(),
                },
                finder: AccountRole {
                    id: finder.id,
                    kind: RoleKind::Finder,
                    account_id,
                    username: account.username,
                },
            })),
            _ => Err(Error::InternalError(format!(
                "Account ID {} is missing one of its founder or finder records",
                account_id
            ))),
        }
    }
}
