//! Tests for TechStackService.

use insparty::server::{
    error::{validation::ErrorCode, Error},
    model::techstack::TechKind,
    service::techstack::TechStackService,
};
use insparty_test_utils::prelude::*;

/// Tests creating terms of different kinds.
///
/// Verifies that the same name may exist once per kind.
///
/// Expected: Ok for each kind
#[tokio::test]
async fn creates_terms() -> Result<(), TestError> {
    let test = TestBuilder::new().with_techstack_tables().build().await?;

    let service = TechStackService::new(&test.db);

    let technology = service.create_term(TechKind::Technology, "Rust").await;
    let framework = service.create_term(TechKind::Framework, "Rust").await;

    assert!(matches!(technology, Ok(ref t) if t.kind == TechKind::Technology));
    assert!(matches!(framework, Ok(ref t) if t.kind == TechKind::Framework && t.name == "Rust"));

    Ok(())
}

/// Tests creating a term whose name already exists within its kind.
///
/// Expected: Err(ValidationError) with a unique error on name
#[tokio::test]
async fn fails_for_existing_term() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_specialization("Backend")
        .build()
        .await?;

    let result = TechStackService::new(&test.db)
        .create_term(TechKind::Specialization, "Backend")
        .await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ref e))
            if e.has("name", ErrorCode::Unique) && e.errors()[0].message == "Already exists."
    ));

    Ok(())
}

/// Tests creating terms with blank or overlong names.
///
/// Expected: Err(ValidationError) with required and max length errors
#[tokio::test]
async fn fails_for_invalid_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_techstack_tables().build().await?;

    let service = TechStackService::new(&test.db);

    let blank = service.create_term(TechKind::Technology, "").await;
    let long = service
        .create_term(TechKind::Technology, &"a".repeat(51))
        .await;

    assert!(matches!(
        blank,
        Err(Error::ValidationError(ref e)) if e.has("name", ErrorCode::Required)
    ));
    assert!(matches!(
        long,
        Err(Error::ValidationError(ref e)) if e.has("name", ErrorCode::MaxLength)
    ));

    Ok(())
}

/// Tests listing and finding terms.
///
/// Expected: terms ordered by name and lookups limited to their kind
#[tokio::test]
async fn lists_and_finds_terms() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_technology("Rust")
        .with_technology("Go")
        .with_framework("Django")
        .build()
        .await?;

    let service = TechStackService::new(&test.db);

    let technologies = service.list_terms(TechKind::Technology).await.unwrap();
    let names: Vec<String> = technologies.into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["Go".to_string(), "Rust".to_string()]);

    let found = service.find_by_name(TechKind::Framework, "Django").await;
    let other_kind = service.find_by_name(TechKind::Technology, "Django").await;
    assert!(matches!(found, Ok(Some(ref t)) if t.name == "Django"));
    assert!(matches!(other_kind, Ok(None)));

    Ok(())
}
