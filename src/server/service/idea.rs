//! Idea service.
//!
//! Ideas are created by founders, each with a unique slug generated from its title. The
//! number of ideas per founder is capped by the configured limit.

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::IdeaStatus;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{account::AccountRepository, idea::IdeaRepository, techstack::TechStackRepository},
    error::{
        validation::{ErrorCode, FieldError, ValidationError},
        Error,
    },
    model::{
        db::{AccountModel, IdeaModel},
        idea::{IdeaSummary, NewIdea},
        techstack::{TechKind, TechStack},
    },
    util::{
        slug::{custom_slugify, MAX_SLUG_ATTEMPTS},
        time::is_recent,
    },
};

/// Service for managing ideas and their finders.
pub struct IdeaService<'a> {
    db: &'a DatabaseConnection,
    founder_ideas_limit: u64,
}

impl<'a> IdeaService<'a> {
    /// Creates a new instance of IdeaService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `founder_ideas_limit` - Maximum number of ideas a single founder may own
    pub fn new(db: &'a DatabaseConnection, founder_ideas_limit: u64) -> Self {
        Self {
            db,
            founder_ideas_limit,
        }
    }

    /// Creates an idea owned by `founder_id`.
    ///
    /// Validates the input, enforces the per-founder idea limit, generates an unused slug and
    /// inserts the idea with its taxonomy and finder links in one transaction.
    ///
    /// # Returns
    /// - `Ok(IdeaModel)` - Idea created
    /// - `Err(Error::ValidationError)` - Invalid fields or the founder reached the idea limit
    /// - `Err(Error::NotFound)` - Founder account does not exist
    /// - `Err(Error::InternalError)` - No unused slug was found
    /// - `Err(Error::DbErr)` - A linked term or finder does not exist or the database failed
    pub async fn create_idea(&self, founder_id: i32, new_idea: NewIdea) -> Result<IdeaModel, Error> {
        let mut errors = ValidationError::new();
        let idea = new_idea.validate(&mut errors);

        let txn = self.db.begin().await?;

        if AccountRepository::new(&txn)
            .get_by_id(founder_id)
            .await?
            .is_none()
        {
            return Err(Error::account_not_found(founder_id));
        }

        let idea_repo = IdeaRepository::new(&txn);

        let idea_count = idea_repo.count_by_founder(founder_id).await?;
        if idea_count >= self.founder_ideas_limit {
            errors.push(FieldError::new(
                "founder",
                ErrorCode::Limit,
                format!(
                    "A founder can have at most {} ideas.",
                    self.founder_ideas_limit
                ),
            ));
        }

        errors.into_result()?;

        let idea = idea.ok_or_else(|| {
            Error::InternalError("Idea validation failed without reporting errors".to_string())
        })?;

        let title_slug = unused_slug(&idea_repo, &idea.title).await?;
        let model = idea_repo.create(founder_id, title_slug, &idea).await?;

        let techstack_repo = TechStackRepository::new(&txn);
        techstack_repo
            .add_idea_links(model.id, TechKind::Technology, &idea.technology_ids)
            .await?;
        techstack_repo
            .add_idea_links(model.id, TechKind::Framework, &idea.framework_ids)
            .await?;
        techstack_repo
            .add_idea_links(model.id, TechKind::Specialization, &idea.specialization_ids)
            .await?;
        idea_repo.add_finders(model.id, &idea.finder_ids).await?;

        txn.commit().await?;

        tracing::info!(
            "Created idea {} ({}) for account ID {}",
            model.id,
            model.title_slug,
            founder_id
        );

        Ok(model)
    }

    /// Gets an idea by its ID.
    pub async fn get_idea(&self, idea_id: i32) -> Result<Option<IdeaModel>, Error> {
        Ok(IdeaRepository::new(self.db).get_by_id(idea_id).await?)
    }

    /// Gets an idea by its slug.
    pub async fn get_by_slug(&self, title_slug: &str) -> Result<Option<IdeaModel>, Error> {
        Ok(IdeaRepository::new(self.db).get_by_slug(title_slug).await?)
    }

    /// Retrieves the display summary of an idea with its founder's username.
    ///
    /// # Returns
    /// - `Ok(Some(IdeaSummary))` - Idea found
    /// - `Ok(None)` - No idea with the given ID
    /// - `Err(Error::InternalError)` - Founder record missing (foreign key not enforced)
    pub async fn summary(&self, idea_id: i32) -> Result<Option<IdeaSummary>, Error> {
        match IdeaRepository::new(self.db).get_with_founder(idea_id).await? {
            None => Ok(None),
            Some((idea, maybe_founder)) => {
                let founder = maybe_founder.ok_or_else(|| {
                    Error::InternalError(format!(
                        "Failed to find founder account ID {} of idea ID {}",
                        idea.founder_id, idea.id
                    ))
                })?;

                Ok(Some(IdeaSummary {
                    id: idea.id,
                    title: idea.title,
                    title_slug: idea.title_slug,
                    founder_username: founder.username,
                }))
            }
        }
    }

    /// Lists ideas of a founder, newest first.
    pub async fn list_by_founder(&self, founder_id: i32) -> Result<Vec<IdeaModel>, Error> {
        Ok(IdeaRepository::new(self.db)
            .list_by_founder(founder_id)
            .await?)
    }

    /// Adds an account as finder of an idea.
    ///
    /// # Returns
    /// - `Ok(true)` - The account was added
    /// - `Ok(false)` - The account already was a finder of the idea
    /// - `Err(Error::NotFound)` - The idea or the account does not exist
    pub async fn add_finder(&self, idea_id: i32, account_id: i32) -> Result<bool, Error> {
        let txn = self.db.begin().await?;
        let idea_repo = IdeaRepository::new(&txn);

        if idea_repo.get_by_id(idea_id).await?.is_none() {
            return Err(Error::idea_not_found(idea_id));
        }

        if AccountRepository::new(&txn)
            .get_by_id(account_id)
            .await?
            .is_none()
        {
            return Err(Error::account_not_found(account_id));
        }

        if idea_repo.finder_exists(idea_id, account_id).await? {
            return Ok(false);
        }

        idea_repo.add_finders(idea_id, &[account_id]).await?;
        txn.commit().await?;

        tracing::debug!("Added account ID {} as finder of idea ID {}", account_id, idea_id);

        Ok(true)
    }

    /// Removes an account from the finders of an idea.
    ///
    /// Returns `Ok(false)` if it wasn't a finder.
    pub async fn remove_finder(&self, idea_id: i32, account_id: i32) -> Result<bool, Error> {
        let result = IdeaRepository::new(self.db)
            .remove_finder(idea_id, account_id)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Accounts that are finders of an idea, ordered by username.
    pub async fn get_finders(&self, idea_id: i32) -> Result<Vec<AccountModel>, Error> {
        Ok(IdeaRepository::new(self.db).get_finders(idea_id).await?)
    }

    /// Changes the recruitment status of an idea.
    pub async fn set_status(&self, idea_id: i32, status: IdeaStatus) -> Result<IdeaModel, Error> {
        let idea = IdeaRepository::new(self.db)
            .update_status(idea_id, status)
            .await?
            .ok_or_else(|| Error::idea_not_found(idea_id))?;

        tracing::debug!("Set status of idea ID {} to {}", idea_id, status.label());

        Ok(idea)
    }

    /// Gets every taxonomy term linked to the idea.
    pub async fn get_tech_stack(&self, idea_id: i32) -> Result<TechStack, Error> {
        let techstack_repo = TechStackRepository::new(self.db);

        Ok(TechStack {
            technologies: techstack_repo
                .idea_terms(idea_id, TechKind::Technology)
                .await?,
            frameworks: techstack_repo
                .idea_terms(idea_id, TechKind::Framework)
                .await?,
            specializations: techstack_repo
                .idea_terms(idea_id, TechKind::Specialization)
                .await?,
        })
    }

    /// Deletes an idea along with its finder and taxonomy links.
    ///
    /// Returns `Ok(false)` if no idea has the given ID.
    pub async fn delete_idea(&self, idea_id: i32) -> Result<bool, Error> {
        let result = IdeaRepository::new(self.db).delete(idea_id).await?;

        Ok(result.rows_affected > 0)
    }

    /// Returns true if the idea was created within the last 7 days of `now`.
    pub fn was_recently_created(idea: &IdeaModel, now: NaiveDateTime) -> bool {
        is_recent(idea.date_created, now)
    }
}

/// Generates slugs for `title` until one is not used by any idea.
///
/// The unique index on `title_slug` still guards against a concurrent insert of the same slug.
async fn unused_slug<C: ConnectionTrait>(
    idea_repo: &IdeaRepository<'_, C>,
    title: &str,
) -> Result<String, Error> {
    for _ in 0..MAX_SLUG_ATTEMPTS {
        let slug = custom_slugify(title);

        if !idea_repo.slug_exists(&slug).await? {
            return Ok(slug);
        }

        tracing::debug!("Slug {} already in use, generating another", slug);
    }

    Err(Error::InternalError(format!(
        "Failed to generate an unused slug for title {:?} after {} attempts",
        title, MAX_SLUG_ATTEMPTS
    )))
}
