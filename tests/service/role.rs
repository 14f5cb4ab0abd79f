//! Tests for RoleService.
//!
//! This module verifies the account creation hooks and the combined role lookup.

use insparty::server::{error::Error, service::role::RoleService};
use insparty_test_utils::prelude::*;
use sea_orm::TransactionTrait;

/// Tests running the account creation hooks inside a transaction.
///
/// Expected: Ok with founder and finder linked to the account after commit
#[tokio::test]
async fn creates_roles_for_new_account() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let account = test.account().insert_account("johndoe").await?;

    let txn = test.db.begin().await?;
    let result = RoleService::new(&txn).on_account_created(&account).await;

    assert!(result.is_ok(), "{:?}", result);
    let (founder, finder) = result.unwrap();
    assert_eq!(founder.account_id, account.id);
    assert_eq!(finder.account_id, account.id);

    txn.commit().await?;

    let roles = RoleService::new(&test.db).get_roles(account.id).await;
    assert!(matches!(roles, Ok(Some(_))));

    Ok(())
}

/// Tests running the hooks twice for the same account.
///
/// Expected: Err(DbErr) from the unique account reference
#[tokio::test]
async fn fails_for_second_run() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let (account, _, _) = test
        .account()
        .insert_account_with_roles("johndoe")
        .await?;

    let result = RoleService::new(&test.db).on_account_created(&account).await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}

/// Tests the role display of an account.
///
/// Expected: Ok(Some) displaying the username with each role
#[tokio::test]
async fn displays_roles() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account("johndoe").build().await?;

    let roles = RoleService::new(&test.db).get_roles(1).await.unwrap();

    assert!(roles.is_some());
    let roles = roles.unwrap();
    assert_eq!(roles.founder.to_string(), "johndoe - Founder");
    assert_eq!(roles.finder.to_string(), "johndoe - Finder");

    Ok(())
}

/// Tests the role lookup for accounts with missing records.
///
/// Expected: Ok(None) without records, Err(InternalError) with only a founder
#[tokio::test]
async fn handles_missing_roles() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let without_roles = test.account().insert_account("johndoe").await?;
    let founder_only = test.account().insert_account("janedoe").await?;
    test.account().insert_founder(founder_only.id).await?;

    let service = RoleService::new(&test.db);

    assert!(matches!(service.get_roles(without_roles.id).await, Ok(None)));
    assert!(matches!(
        service.get_roles(founder_only.id).await,
        Err(Error::InternalError(_))
    ));

    Ok(())
}
