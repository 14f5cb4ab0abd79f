//! Taxonomy term fixture utilities.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{FrameworkModel, SpecializationModel, TechnologyModel},
    TestContext,
};

impl TestContext {
    pub fn techstack<'a>(&'a self) -> TechStackFixtures<'a> {
        TechStackFixtures { setup: self }
    }
}

pub struct TechStackFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> TechStackFixtures<'a> {
    pub async fn insert_technology(&self, name: &str) -> Result<TechnologyModel, TestError> {
        Ok(
            entity::prelude::Technology::insert(entity::technology::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_framework(&self, name: &str) -> Result<FrameworkModel, TestError> {
        Ok(
            entity::prelude::Framework::insert(entity::framework::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_specialization(
        &self,
        name: &str,
    ) -> Result<SpecializationModel, TestError> {
        Ok(
            entity::prelude::Specialization::insert(entity::specialization::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Link an existing account to an existing technology.
    pub async fn link_account_technology(
        &self,
        account_id: i32,
        technology_id: i32,
    ) -> Result<(), TestError> {
        entity::prelude::AccountTechnology::insert(entity::account_technology::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            technology_id: ActiveValue::Set(technology_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(())
    }
}
