//! Tests for IdeaService.
//!
//! This module verifies idea creation with slugs, links and the founder idea limit, finder
//! management, status changes, summaries and the recently created check.

use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::IdeaStatus;
use insparty::server::{
    error::{validation::ErrorCode, Error},
    model::idea::NewIdea,
    service::idea::IdeaService,
};
use insparty_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

fn new_idea(title: &str) -> NewIdea {
    NewIdea {
        title: title.to_string(),
        description: "Platform matching people with project ideas".to_string(),
        repository: Some("https://github.com/insparty/insparty.git".to_string()),
        advancement: vec!["J".to_string(), "R".to_string()],
        team_size: 4,
        ..Default::default()
    }
}

/// Tests creating an idea with taxonomy and finder links.
///
/// Verifies that the slug is generated from the title with a random suffix and that each link
/// is stored.
///
/// Expected: Ok with an open idea and its links
#[tokio::test]
async fn creates_idea_with_links() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_idea_tables()
        .with_account("johndoe")
        .with_account("janedoe")
        .with_technology("Rust")
        .with_framework("Axum")
        .with_specialization("Backend")
        .build()
        .await?;

    let idea = NewIdea {
        technology_ids: vec![1],
        framework_ids: vec![1],
        specialization_ids: vec![1],
        finder_ids: vec![2, 2],
        ..new_idea("Team Finder App")
    };

    let service = IdeaService::new(&test.db, 3);
    let result = service.create_idea(1, idea).await;

    assert!(result.is_ok(), "{:?}", result);
    let idea = result.unwrap();
    assert!(idea.title_slug.starts_with("team-finder-app-"));
    assert_eq!(idea.title_slug.len(), "team-finder-app-".len() + 5);
    assert_eq!(idea.status, IdeaStatus::Open);
    assert_eq!(idea.advancement, "J,R");
    assert_eq!(idea.team_size, 4);

    let stack = service.get_tech_stack(idea.id).await.unwrap();
    assert_eq!(stack.technologies[0].name, "Rust");
    assert_eq!(stack.frameworks[0].name, "Axum");
    assert_eq!(stack.specializations[0].name, "Backend");

    let finders = service.get_finders(idea.id).await.unwrap();
    assert_eq!(finders.len(), 1);
    assert_eq!(finders[0].username, "janedoe");

    let by_slug = service.get_by_slug(&idea.title_slug).await.unwrap();
    assert!(matches!(by_slug, Some(ref found) if found.id == idea.id));

    Ok(())
}

/// Tests the per-founder idea limit.
///
/// Expected: Err(ValidationError) with a limit error on founder once the limit is reached
#[tokio::test]
async fn fails_when_limit_reached() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_idea_tables()
        .with_account("johndoe")
        .build()
        .await?;

    let service = IdeaService::new(&test.db, 1);
    let first = service.create_idea(1, new_idea("First idea")).await;
    assert!(first.is_ok(), "{:?}", first);

    let second = service.create_idea(1, new_idea("Second idea")).await;

    assert!(matches!(
        second,
        Err(Error::ValidationError(ref e)) if e.has("founder", ErrorCode::Limit)
    ));
    assert_eq!(entity::prelude::Idea::find().count(&test.db).await?, 1);

    Ok(())
}

/// Tests creating an idea with invalid attributes.
///
/// Expected: Err(ValidationError) listing every invalid attribute
#[tokio::test]
async fn fails_for_invalid_idea() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_idea_tables()
        .with_account("johndoe")
        .build()
        .await?;

    let idea = NewIdea {
        title: String::new(),
        repository: Some("repository".to_string()),
        advancement: vec!["N".to_string(), "N".to_string()],
        team_size: 0,
        ..new_idea("ignored")
    };

    let result = IdeaService::new(&test.db, 3).create_idea(1, idea).await;

    let Err(Error::ValidationError(errors)) = result else {
        panic!("expected validation error, got {:?}", result);
    };
    assert!(errors.has("title", ErrorCode::Required));
    assert!(errors.has("repository", ErrorCode::Invalid));
    assert!(errors.has("advancement", ErrorCode::Invalid));
    assert!(errors.has("team_size", ErrorCode::Invalid));

    Ok(())
}

/// Tests creating an idea for a founder account that doesn't exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_nonexistent_founder() -> Result<(), TestError> {
    let test = TestBuilder::new().with_idea_tables().build().await?;

    let result = IdeaService::new(&test.db, 3)
        .create_idea(1, new_idea("Orphan idea"))
        .await;

    assert!(matches!(result, Err(Error::NotFound { id: 1, .. })));

    Ok(())
}

mod finders {
    use insparty::server::{error::Error, service::idea::IdeaService};
    use insparty_test_utils::prelude::*;

    /// Expect true for the first insert and false when the account already is a finder
    #[tokio::test]
    async fn adds_finder_once() -> Result<(), TestError> {
        let test = TestBuilder::new().with_idea_tables().build().await?;
        let founder = test.account().insert_account("johndoe").await?;
        let finder = test.account().insert_account("janedoe").await?;
        let idea = test.idea().insert_idea(founder.id, "Insparty").await?;

        let service = IdeaService::new(&test.db, 3);

        assert!(matches!(service.add_finder(idea.id, finder.id).await, Ok(true)));
        assert!(matches!(service.add_finder(idea.id, finder.id).await, Ok(false)));
        assert_eq!(service.get_finders(idea.id).await.unwrap().len(), 1);

        Ok(())
    }

    /// Expect NotFound for a nonexistent idea or account
    #[tokio::test]
    async fn fails_for_nonexistent_records() -> Result<(), TestError> {
        let test = TestBuilder::new().with_idea_tables().build().await?;
        let founder = test.account().insert_account("johndoe").await?;
        let idea = test.idea().insert_idea(founder.id, "Insparty").await?;

        let service = IdeaService::new(&test.db, 3);

        assert!(matches!(
            service.add_finder(idea.id + 1, founder.id).await,
            Err(Error::NotFound { entity: "Idea", .. })
        ));
        assert!(matches!(
            service.add_finder(idea.id, founder.id + 1).await,
            Err(Error::NotFound {
                entity: "Account",
                ..
            })
        ));

        Ok(())
    }

    /// Expect the finder link to be removed once
    #[tokio::test]
    async fn removes_finder() -> Result<(), TestError> {
        let test = TestBuilder::new().with_idea_tables().build().await?;
        let founder = test.account().insert_account("johndoe").await?;
        let finder = test.account().insert_account("janedoe").await?;
        let idea = test.idea().insert_idea(founder.id, "Insparty").await?;
        test.idea().insert_idea_finder(idea.id, finder.id).await?;

        let service = IdeaService::new(&test.db, 3);

        assert!(matches!(service.remove_finder(idea.id, finder.id).await, Ok(true)));
        assert!(matches!(service.remove_finder(idea.id, finder.id).await, Ok(false)));
        assert!(service.get_finders(idea.id).await.unwrap().is_empty());

        Ok(())
    }
}

/// Tests the summary display of an idea.
///
/// Expected: Ok(Some) displaying the title and founder username
#[tokio::test]
async fn displays_summary() -> Result<(), TestError> {
    let test = TestBuilder::new().with_idea_tables().build().await?;
    let founder = test.account().insert_account("johndoe").await?;
    let idea = test.idea().insert_idea(founder.id, "Insparty").await?;

    let service = IdeaService::new(&test.db, 3);
    let summary = service.summary(idea.id).await.unwrap();

    assert!(summary.is_some());
    assert_eq!(
        summary.unwrap().to_string(),
        "Insparty - Idea by johndoe account"
    );
    assert!(matches!(service.summary(idea.id + 1).await, Ok(None)));

    Ok(())
}

/// Tests listing the ideas of a founder.
///
/// Expected: Ok with the newest idea first
#[tokio::test]
async fn lists_ideas_newest_first() -> Result<(), TestError> {
    let test = TestBuilder::new().with_idea_tables().build().await?;
    let founder = test.account().insert_account("johndoe").await?;
    let now = Utc::now().naive_utc();
    test.idea()
        .insert_idea_created_at(founder.id, "Old idea", now - Duration::days(3))
        .await?;
    test.idea()
        .insert_idea_created_at(founder.id, "New idea", now)
        .await?;

    let ideas = IdeaService::new(&test.db, 3)
        .list_by_founder(founder.id)
        .await
        .unwrap();

    let titles: Vec<&str> = ideas.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["New idea", "Old idea"]);

    Ok(())
}

/// Tests changing the recruitment status.
///
/// Expected: Ok with the new status, Err(NotFound) for a nonexistent idea
#[tokio::test]
async fn sets_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_idea_tables().build().await?;
    let founder = test.account().insert_account("johndoe").await?;
    let idea = test.idea().insert_idea(founder.id, "Insparty").await?;

    let service = IdeaService::new(&test.db, 3);

    let result = service.set_status(idea.id, IdeaStatus::Suspended).await;
    assert!(matches!(result, Ok(ref i) if i.status == IdeaStatus::Suspended));

    let missing = service.set_status(idea.id + 1, IdeaStatus::Closed).await;
    assert!(matches!(missing, Err(Error::NotFound { entity: "Idea", .. })));

    Ok(())
}

/// Tests the recently created check around the 7 day boundary.
#[test]
fn checks_recently_created() {
    let now = Utc::now().naive_utc();

    let fresh = factory::mock_idea_model(1, 1, "Fresh idea", now - Duration::hours(1));
    let old = factory::mock_idea_model(2, 1, "Old idea", now - Duration::days(30));

    assert!(IdeaService::was_recently_created(&fresh, now));
    assert!(!IdeaService::was_recently_created(&old, now));
}

/// Tests creating an idea linked to a technology that doesn't exist.
///
/// Verifies that the failing link insert rolls back the idea itself.
///
/// Expected: Err(DbErr) and no idea rows
#[tokio::test]
async fn rolls_back_idea_when_link_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_idea_tables()
        .with_account("johndoe")
        .build()
        .await?;

    let idea = NewIdea {
        technology_ids: vec![42],
        ..new_idea("Broken links")
    };

    let result = IdeaService::new(&test.db, 3).create_idea(1, idea).await;

    assert!(matches!(result, Err(Error::DbErr(_))));
    assert_eq!(entity::prelude::Idea::find().count(&test.db).await?, 0);
    assert_eq!(
        entity::prelude::IdeaTechnology::find().count(&test.db).await?,
        0
    );

    Ok(())
}
