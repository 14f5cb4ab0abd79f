//! Idea fixture utilities.

use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::IdeaStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{IdeaFinderModel, IdeaModel},
    TestContext,
};

impl TestContext {
    pub fn idea<'a>(&'a self) -> IdeaFixtures<'a> {
        IdeaFixtures { setup: self }
    }
}

pub struct IdeaFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> IdeaFixtures<'a> {
    /// Insert an open idea with a team size of 4, created now.
    ///
    /// The slug is the lowercased title with spaces replaced by hyphens, so titles must be
    /// distinct within a test.
    pub async fn insert_idea(&self, founder_id: i32, title: &str) -> Result<IdeaModel, TestError> {
        self.insert_idea_created_at(founder_id, title, Utc::now().naive_utc())
            .await
    }

    pub async fn insert_idea_created_at(
        &self,
        founder_id: i32,
        title: &str,
        date_created: NaiveDateTime,
    ) -> Result<IdeaModel, TestError> {
        Ok(
            entity::prelude::Idea::insert(entity::idea::ActiveModel {
                title: ActiveValue::Set(title.to_string()),
                title_slug: ActiveValue::Set(title.to_lowercase().replace(' ', "-")),
                founder_id: ActiveValue::Set(founder_id),
                advancement: ActiveValue::Set(String::new()),
                repository: ActiveValue::Set(None),
                description: ActiveValue::Set(format!("Description of {}", title)),
                date_created: ActiveValue::Set(date_created),
                status: ActiveValue::Set(IdeaStatus::Open),
                team_size: ActiveValue::Set(4),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_idea_finder(
        &self,
        idea_id: i32,
        account_id: i32,
    ) -> Result<IdeaFinderModel, TestError> {
        Ok(
            entity::prelude::IdeaFinder::insert(entity::idea_finder::ActiveModel {
                idea_id: ActiveValue::Set(idea_id),
                account_id: ActiveValue::Set(account_id),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
