//! Tests for AccountService.
//!
//! This module verifies registration with its role hooks, uniqueness and field validation,
//! username and e-mail changes, verification, deletion and the recently joined check.

use chrono::{Duration, NaiveDate, Utc};
use insparty::server::{
    error::{validation::ErrorCode, Error},
    model::{
        account::{NewAccount, ProfileUpdate},
        techstack::TechKind,
    },
    service::account::{AccountService, EMAIL_TAKEN_TEXT, USERNAME_TAKEN_TEXT},
};
use insparty_test_utils::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

/// Tests registering an account with a complete profile.
///
/// Verifies that the e-mail is lowercased, the profile is stored and the founder and finder
/// records are created.
///
/// Expected: Ok with the account and one founder and one finder record
#[tokio::test]
async fn registers_account_with_roles() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;

    let profile = ProfileUpdate {
        firstname: "John".to_string(),
        lastname: "Doe".to_string(),
        phone: Some("+48123456789".to_string()),
        linkedin: Some("https://linkedin.com/in/johndoe".to_string()),
        repository: Some("https://github.com/johndoe".to_string()),
        experience: Some("R".to_string()),
        sex: Some("M".to_string()),
        birthdate: Some(NaiveDate::from_ymd_opt(1990, 5, 17).unwrap()),
        description: "Backend developer".to_string(),
    };
    let new_account = NewAccount::new("john_doe", "John.Doe@Example.com").with_profile(profile);

    let result = AccountService::new(&test.db).register(new_account).await;

    assert!(result.is_ok(), "{:?}", result);
    let account = result.unwrap();
    assert_eq!(account.username, "john_doe");
    assert_eq!(account.email, "john.doe@example.com");
    assert_eq!(account.phone.as_deref(), Some("+48123456789"));
    assert!(!account.is_verified);

    let founders = entity::prelude::Founder::find()
        .filter(entity::founder::Column::AccountId.eq(account.id))
        .count(&test.db)
        .await?;
    let finders = entity::prelude::Finder::find()
        .filter(entity::finder::Column::AccountId.eq(account.id))
        .count(&test.db)
        .await?;
    assert_eq!(founders, 1);
    assert_eq!(finders, 1);

    Ok(())
}

/// Tests registering with a taken username and e-mail.
///
/// Verifies that both uniqueness failures are reported together and nothing is inserted.
///
/// Expected: Err(ValidationError) with unique errors on username and email
#[tokio::test]
async fn fails_for_taken_username_and_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account("johndoe").build().await?;

    let result = AccountService::new(&test.db)
        .register(NewAccount::new("johndoe", "JohnDoe@example.com"))
        .await;

    let Err(Error::ValidationError(errors)) = result else {
        panic!("expected validation error, got {:?}", result);
    };
    assert!(errors.has("username", ErrorCode::Unique));
    assert!(errors.has("email", ErrorCode::Unique));
    assert!(errors
        .errors()
        .iter()
        .any(|e| e.message == USERNAME_TAKEN_TEXT));
    assert!(errors.errors().iter().any(|e| e.message == EMAIL_TAKEN_TEXT));

    let accounts = entity::prelude::Account::find().count(&test.db).await?;
    assert_eq!(accounts, 1);

    Ok(())
}

/// Tests registering with several invalid fields.
///
/// Verifies that every failing field is listed.
///
/// Expected: Err(ValidationError) naming each invalid field
#[tokio::test]
async fn fails_for_invalid_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;

    let today = Utc::now().date_naive();
    let profile = ProfileUpdate {
        phone: Some("12ab".to_string()),
        linkedin: Some("https://facebook.com/johndoe".to_string()),
        experience: Some("X".to_string()),
        birthdate: Some(today - Duration::days(365)),
        ..Default::default()
    };
    let new_account = NewAccount::new("john doe", "not-an-email").with_profile(profile);

    let result = AccountService::new(&test.db).register(new_account).await;

    let Err(Error::ValidationError(errors)) = result else {
        panic!("expected validation error, got {:?}", result);
    };
    assert!(errors.has("username", ErrorCode::Invalid));
    assert!(errors.has("email", ErrorCode::Invalid));
    assert!(errors.has("phone", ErrorCode::Invalid));
    assert!(errors.has("linkedin", ErrorCode::Invalid));
    assert!(errors.has("experience", ErrorCode::InvalidChoice));
    assert!(errors.has_field("birthdate"));

    let accounts = entity::prelude::Account::find().count(&test.db).await?;
    assert_eq!(accounts, 0);

    Ok(())
}

mod set_new_username {
    use insparty::server::{
        error::{validation::ErrorCode, Error},
        service::account::AccountService,
    };
    use insparty_test_utils::prelude::*;

    /// Expect the username to change when it is valid and free
    #[tokio::test]
    async fn changes_username() -> Result<(), TestError> {
        let test = TestBuilder::new().with_account_tables().build().await?;
        let account = test.account().insert_account("johndoe").await?;

        let result = AccountService::new(&test.db)
            .set_new_username(account.id, "janedoe")
            .await;

        assert!(matches!(result, Ok(ref a) if a.username == "janedoe"));

        Ok(())
    }

    /// Expect Unchanged when the new username equals the current one
    #[tokio::test]
    async fn fails_for_same_username() -> Result<(), TestError> {
        let test = TestBuilder::new().with_account_tables().build().await?;
        let account = test.account().insert_account("johndoe").await?;

        let result = AccountService::new(&test.db)
            .set_new_username(account.id, "johndoe")
            .await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ref e)) if e.has("username", ErrorCode::Unchanged)
        ));

        Ok(())
    }

    /// Expect Unique when another account uses the username
    #[tokio::test]
    async fn fails_for_taken_username() -> Result<(), TestError> {
        let test = TestBuilder::new().with_account_tables().build().await?;
        let account = test.account().insert_account("johndoe").await?;
        test.account().insert_account("janedoe").await?;

        let result = AccountService::new(&test.db)
            .set_new_username(account.id, "janedoe")
            .await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ref e)) if e.has("username", ErrorCode::Unique)
        ));

        Ok(())
    }

    /// Expect Invalid for a username with illegal characters
    #[tokio::test]
    async fn fails_for_invalid_username() -> Result<(), TestError> {
        let test = TestBuilder::new().with_account_tables().build().await?;
        let account = test.account().insert_account("johndoe").await?;

        let result = AccountService::new(&test.db)
            .set_new_username(account.id, "john-doe!")
            .await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ref e)) if e.has("username", ErrorCode::Invalid)
        ));

        Ok(())
    }

    /// Expect NotFound for a nonexistent account
    #[tokio::test]
    async fn fails_for_nonexistent_account() -> Result<(), TestError> {
        let test = TestBuilder::new().with_account_tables().build().await?;

        let result = AccountService::new(&test.db)
            .set_new_username(1, "janedoe")
            .await;

        assert!(matches!(result, Err(Error::NotFound { id: 1, .. })));

        Ok(())
    }
}

mod set_new_email {
    use insparty::server::{
        error::{validation::ErrorCode, Error},
        service::account::AccountService,
    };
    use insparty_test_utils::prelude::*;

    /// Expect the lowercased address to be saved
    #[tokio::test]
    async fn changes_email() -> Result<(), TestError> {
        let test = TestBuilder::new().with_account_tables().build().await?;
        let account = test.account().insert_account("johndoe").await?;

        let result = AccountService::new(&test.db)
            .set_new_email(account.id, "John@Insparty.dev")
            .await;

        assert!(matches!(result, Ok(ref a) if a.email == "john@insparty.dev"));

        Ok(())
    }

    /// Expect Unchanged when only the case differs from the current address
    #[tokio::test]
    async fn fails_for_same_email() -> Result<(), TestError> {
        let test = TestBuilder::new().with_account_tables().build().await?;
        let account = test.account().insert_account("johndoe").await?;

        let result = AccountService::new(&test.db)
            .set_new_email(account.id, "JohnDoe@Example.com")
            .await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ref e)) if e.has("email", ErrorCode::Unchanged)
        ));

        Ok(())
    }

    /// Expect Unique when another account uses the address
    #[tokio::test]
    async fn fails_for_taken_email() -> Result<(), TestError> {
        let test = TestBuilder::new().with_account_tables().build().await?;
        let account = test.account().insert_account("johndoe").await?;
        test.account().insert_account("janedoe").await?;

        let result = AccountService::new(&test.db)
            .set_new_email(account.id, "janedoe@example.com")
            .await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ref e)) if e.has("email", ErrorCode::Unique)
        ));

        Ok(())
    }
}

/// Tests replacing the technologies of an account.
///
/// Expected: Ok with only the newly selected terms linked
#[tokio::test]
async fn replaces_tech_stack() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_technology("Rust")
        .with_technology("Python")
        .with_technology("Go")
        .build()
        .await?;
    let account = test.account().insert_account("johndoe").await?;
    test.techstack().link_account_technology(account.id, 2).await?;

    let service = AccountService::new(&test.db);
    let result = service
        .set_tech_stack(account.id, TechKind::Technology, &[3, 1])
        .await;

    assert!(result.is_ok(), "{:?}", result);
    let names: Vec<String> = result.unwrap().into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["Go".to_string(), "Rust".to_string()]);

    let stack = service.get_tech_stack(account.id).await.unwrap();
    assert_eq!(stack.technologies.len(), 2);
    assert!(stack.frameworks.is_empty());

    Ok(())
}

/// Tests verifying an account.
///
/// Expected: Ok with is_verified set
#[tokio::test]
async fn verifies_account() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let account = test.account().insert_account("johndoe").await?;

    let result = AccountService::new(&test.db).verify_account(account.id).await;

    assert!(matches!(result, Ok(ref a) if a.is_verified));

    Ok(())
}

/// Tests deleting an account that owns an idea.
///
/// Verifies that roles, ideas and finder links are removed with the account.
///
/// Expected: Ok(true) and no dependent rows left
#[tokio::test]
async fn deletes_account_with_dependents() -> Result<(), TestError> {
    let test = TestBuilder::new().with_idea_tables().build().await?;
    let (account, _, _) = test
        .account()
        .insert_account_with_roles("johndoe")
        .await?;
    let other = test.account().insert_account("janedoe").await?;
    let idea = test.idea().insert_idea(account.id, "Insparty").await?;
    test.idea().insert_idea_finder(idea.id, other.id).await?;

    let result = AccountService::new(&test.db).delete_account(account.id).await;

    assert!(matches!(result, Ok(true)));
    assert_eq!(entity::prelude::Founder::find().count(&test.db).await?, 0);
    assert_eq!(entity::prelude::Finder::find().count(&test.db).await?, 0);
    assert_eq!(entity::prelude::Idea::find().count(&test.db).await?, 0);
    assert_eq!(entity::prelude::IdeaFinder::find().count(&test.db).await?, 0);

    let again = AccountService::new(&test.db).delete_account(account.id).await;
    assert!(matches!(again, Ok(false)));

    Ok(())
}

/// Tests the recently joined check around the 7 day boundary.
#[test]
fn checks_recently_joined() {
    let now = Utc::now().naive_utc();

    let fresh = factory::mock_account_model(1, "johndoe", now - Duration::days(6));
    let old = factory::mock_account_model(2, "janedoe", now - Duration::days(8));
    let future = factory::mock_account_model(3, "jimdoe", now + Duration::days(1));

    assert!(AccountService::has_recently_joined(&fresh, now));
    assert!(!AccountService::has_recently_joined(&old, now));
    assert!(!AccountService::has_recently_joined(&future, now));
}

/// Tests registering when the finder hook fails.
///
/// Verifies that the account insert and founder record are rolled back with the failing
/// finder insert, leaving no partial registration.
///
/// Expected: Err and no account or founder rows
#[tokio::test]
async fn rolls_back_registration_when_hook_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .with_table(entity::prelude::Founder)
        .build()
        .await?;

    let result = AccountService::new(&test.db)
        .register(NewAccount::new("johndoe", "johndoe@example.com"))
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Account::find().count(&test.db).await?, 0);
    assert_eq!(entity::prelude::Founder::find().count(&test.db).await?, 0);

    Ok(())
}

/// Tests registering with an e-mail address longer than 254 characters.
///
/// Expected: Err(ValidationError) with a max length error on email
#[tokio::test]
async fn fails_for_overlong_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;

    let email = format!("{}@example.com", "a".repeat(300));
    let result = AccountService::new(&test.db)
        .register(NewAccount::new("johndoe", email))
        .await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ref e)) if e.has("email", ErrorCode::MaxLength)
    ));
    assert_eq!(entity::prelude::Account::find().count(&test.db).await?, 0);

    Ok(())
}
