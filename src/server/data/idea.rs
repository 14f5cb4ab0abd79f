//! Idea and idea finder persistence.

use chrono::Utc;
use entity::sea_orm_active_enums::IdeaStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::techstack::unique_ids,
    model::{
        db::{AccountModel, IdeaModel},
        idea::ValidatedIdea,
    },
};

/// Repository for ideas and their finder links
pub struct IdeaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IdeaRepository<'a, C> {
    /// Creates a new instance of [`IdeaRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new open idea without any links
    ///
    /// A `title_slug` already in use returns a [`DbErr`] from the unique index.
    pub async fn create(
        &self,
        founder_id: i32,
        title_slug: String,
        idea: &ValidatedIdea,
    ) -> Result<IdeaModel, DbErr> {
        let idea = entity::idea::ActiveModel {
            title: ActiveValue::Set(idea.title.clone()),
            title_slug: ActiveValue::Set(title_slug),
            founder_id: ActiveValue::Set(founder_id),
            advancement: ActiveValue::Set(idea.advancement.to_stored()),
            repository: ActiveValue::Set(idea.repository.clone()),
            description: ActiveValue::Set(idea.description.clone()),
            date_created: ActiveValue::Set(Utc::now().naive_utc()),
            status: ActiveValue::Set(IdeaStatus::Open),
            team_size: ActiveValue::Set(idea.team_size),
            ..Default::default()
        };

        idea.insert(self.db).await
    }

    /// Gets an idea by its ID
    pub async fn get_by_id(&self, idea_id: i32) -> Result<Option<IdeaModel>, DbErr> {
        entity::prelude::Idea::find_by_id(idea_id).one(self.db).await
    }

    /// Gets an idea together with its founder account
    pub async fn get_with_founder(
        &self,
        idea_id: i32,
    ) -> Result<Option<(IdeaModel, Option<AccountModel>)>, DbErr> {
        entity::prelude::Idea::find_by_id(idea_id)
            .find_also_related(entity::account::Entity)
            .one(self.db)
            .await
    }

    /// Gets an idea by its slug
    pub async fn get_by_slug(&self, title_slug: &str) -> Result<Option<IdeaModel>, DbErr> {
        entity::prelude::Idea::find()
            .filter(entity::idea::Column::TitleSlug.eq(title_slug))
            .one(self.db)
            .await
    }

    /// Returns true if an idea uses the slug
    pub async fn slug_exists(&self, title_slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Idea::find()
            .filter(entity::idea::Column::TitleSlug.eq(title_slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts the ideas owned by a founder account
    pub async fn count_by_founder(&self, founder_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Idea::find()
            .filter(entity::idea::Column::FounderId.eq(founder_id))
            .count(self.db)
            .await
    }

    /// Lists ideas of a founder, newest first
    pub async fn list_by_founder(&self, founder_id: i32) -> Result<Vec<IdeaModel>, DbErr> {
        entity::prelude::Idea::find()
            .filter(entity::idea::Column::FounderId.eq(founder_id))
            .order_by_desc(entity::idea::Column::DateCreated)
            .order_by_desc(entity::idea::Column::Id)
            .all(self.db)
            .await
    }

    /// Updates the recruitment status of an idea
    ///
    /// Returns `None` if the idea does not exist.
    pub async fn update_status(
        &self,
        idea_id: i32,
        status: IdeaStatus,
    ) -> Result<Option<IdeaModel>, DbErr> {
        let idea = match entity::prelude::Idea::find_by_id(idea_id)
            .one(self.db)
            .await?
        {
            Some(idea) => idea,
            None => return Ok(None),
        };

        let mut idea_am = idea.into_active_model();
        idea_am.status = ActiveValue::Set(status);

        let idea = idea_am.update(self.db).await?;

        Ok(Some(idea))
    }

    /// Deletes an idea
    ///
    /// Finder and taxonomy links cascade. To confirm the deletion result check the
    /// [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, idea_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Idea::delete_by_id(idea_id)
            .exec(self.db)
            .await
    }

    /// Links accounts to an idea as finders, duplicate IDs are linked once
    pub async fn add_finders(&self, idea_id: i32, account_ids: &[i32]) -> Result<(), DbErr> {
        let account_ids = unique_ids(account_ids);

        if account_ids.is_empty() {
            return Ok(());
        }

        entity::prelude::IdeaFinder::insert_many(account_ids.into_iter().map(|account_id| {
            entity::idea_finder::ActiveModel {
                idea_id: ActiveValue::Set(idea_id),
                account_id: ActiveValue::Set(account_id),
            }
        }))
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Returns true if the account is a finder of the idea
    pub async fn finder_exists(&self, idea_id: i32, account_id: i32) -> Result<bool, DbErr> {
        let finder = entity::prelude::IdeaFinder::find_by_id((idea_id, account_id))
            .one(self.db)
            .await?;

        Ok(finder.is_some())
    }

    /// Removes the finder link of an account
    pub async fn remove_finder(&self, idea_id: i32, account_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::IdeaFinder::delete_by_id((idea_id, account_id))
            .exec(self.db)
            .await
    }

    /// Accounts linked to an idea as finders, ordered by username
    pub async fn get_finders(&self, idea_id: i32) -> Result<Vec<AccountModel>, DbErr> {
        entity::prelude::Account::find()
            .inner_join(entity::idea_finder::Entity)
            .filter(entity::idea_finder::Column::IdeaId.eq(idea_id))
            .order_by_asc(entity::account::Column::Username)
            .all(self.db)
            .await
    }
}
