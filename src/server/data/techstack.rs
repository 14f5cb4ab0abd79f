//! Taxonomy term persistence.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::techstack::{TechKind, TechTerm};

/// Technology, framework and specialization terms and their links to accounts and ideas
///
/// Every method takes the [`TechKind`] selecting which of the three tables it works on.
pub struct TechStackRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TechStackRepository<'a, C> {
    /// Creates a new instance of [`TechStackRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new term, a duplicate name returns a [`DbErr`]
    pub async fn create(&self, kind: TechKind, name: String) -> Result<TechTerm, DbErr> {
        let term = match kind {
            TechKind::Technology => entity::technology::ActiveModel {
                name: ActiveValue::Set(name),
                ..Default::default()
            }
            .insert(self.db)
            .await?
            .into(),
            TechKind::Framework => entity::framework::ActiveModel {
                name: ActiveValue::Set(name),
                ..Default::default()
            }
            .insert(self.db)
            .await?
            .into(),
            TechKind::Specialization => entity::specialization::ActiveModel {
                name: ActiveValue::Set(name),
                ..Default::default()
            }
            .insert(self.db)
            .await?
            .into(),
        };

        Ok(term)
    }

    /// Finds a term of `kind` by exact name
    pub async fn find_by_name(&self, kind: TechKind, name: &str) -> Result<Option<TechTerm>, DbErr> {
        let term = match kind {
            TechKind::Technology => entity::prelude::Technology::find()
                .filter(entity::technology::Column::Name.eq(name))
                .one(self.db)
                .await?
                .map(TechTerm::from),
            TechKind::Framework => entity::prelude::Framework::find()
                .filter(entity::framework::Column::Name.eq(name))
                .one(self.db)
                .await?
                .map(TechTerm::from),
            TechKind::Specialization => entity::prelude::Specialization::find()
                .filter(entity::specialization::Column::Name.eq(name))
                .one(self.db)
                .await?
                .map(TechTerm::from),
        };

        Ok(term)
    }

    /// Lists all terms of a kind ordered by name
    pub async fn list(&self, kind: TechKind) -> Result<Vec<TechTerm>, DbErr> {
        let terms = match kind {
            TechKind::Technology => entity::prelude::Technology::find()
                .order_by_asc(entity::technology::Column::Name)
                .all(self.db)
                .await?
                .into_iter()
                .map(TechTerm::from)
                .collect(),
            TechKind::Framework => entity::prelude::Framework::find()
                .order_by_asc(entity::framework::Column::Name)
                .all(self.db)
                .await?
                .into_iter()
                .map(TechTerm::from)
                .collect(),
            TechKind::Specialization => entity::prelude::Specialization::find()
                .order_by_asc(entity::specialization::Column::Name)
                .all(self.db)
                .await?
                .into_iter()
                .map(TechTerm::from)
                .collect(),
        };

        Ok(terms)
    }

    /// Terms of a kind linked to an account, ordered by name
    pub async fn account_terms(
        &self,
        account_id: i32,
        kind: TechKind,
    ) -> Result<Vec<TechTerm>, DbErr> {
        let terms = match kind {
            TechKind::Technology => entity::prelude::Technology::find()
                .inner_join(entity::account::Entity)
                .filter(entity::account::Column::Id.eq(account_id))
                .order_by_asc(entity::technology::Column::Name)
                .all(self.db)
                .await?
                .into_iter()
                .map(TechTerm::from)
                .collect(),
            TechKind::Framework => entity::prelude::Framework::find()
                .inner_join(entity::account::Entity)
                .filter(entity::account::Column::Id.eq(account_id))
                .order_by_asc(entity::framework::Column::Name)
                .all(self.db)
                .await?
                .into_iter()
                .map(TechTerm::from)
                .collect(),
            TechKind::Specialization => entity::prelude::Specialization::find()
                .inner_join(entity::account::Entity)
                .filter(entity::account::Column::Id.eq(account_id))
                .order_by_asc(entity::specialization::Column::Name)
                .all(self.db)
                .await?
                .into_iter()
                .map(TechTerm::from)
                .collect(),
        };

        Ok(terms)
    }

    /// Replaces the links of one kind between an account and its terms
    ///
    /// Duplicate IDs are linked once, an empty list removes every link of the kind. A term
    /// that does not exist returns a [`DbErr`] from the foreign key.
    pub async fn replace_account_links(
        &self,
        account_id: i32,
        kind: TechKind,
        term_ids: &[i32],
    ) -> Result<(), DbErr> {
        let term_ids = unique_ids(term_ids);

        match kind {
            TechKind::Technology => {
                entity::prelude::AccountTechnology::delete_many()
                    .filter(entity::account_technology::Column::AccountId.eq(account_id))
                    .exec(self.db)
                    .await?;

                if !term_ids.is_empty() {
                    entity::prelude::AccountTechnology::insert_many(term_ids.into_iter().map(
                        |technology_id| entity::account_technology::ActiveModel {
                            account_id: ActiveValue::Set(account_id),
                            technology_id: ActiveValue::Set(technology_id),
                        },
                    ))
                    .exec_without_returning(self.db)
                    .await?;
                }
            }
            TechKind::Framework => {
                entity::prelude::AccountFramework::delete_many()
                    .filter(entity::account_framework::Column::AccountId.eq(account_id))
                    .exec(self.db)
                    .await?;

                if !term_ids.is_empty() {
                    entity::prelude::AccountFramework::insert_many(term_ids.into_iter().map(
                        |framework_id| entity::account_framework::ActiveModel {
                            account_id: ActiveValue::Set(account_id),
                            framework_id: ActiveValue::Set(framework_id),
                        },
                    ))
                    .exec_without_returning(self.db)
                    .await?;
                }
            }
            TechKind::Specialization => {
                entity::prelude::AccountSpecialization::delete_many()
                    .filter(entity::account_specialization::Column::AccountId.eq(account_id))
                    .exec(self.db)
                    .await?;

                if !term_ids.is_empty() {
                    entity::prelude::AccountSpecialization::insert_many(
                        term_ids.into_iter().map(|specialization_id| {
                            entity::account_specialization::ActiveModel {
                                account_id: ActiveValue::Set(account_id),
                                specialization_id: ActiveValue::Set(specialization_id),
                            }
                        }),
                    )
                    .exec_without_returning(self.db)
                    .await?;
                }
            }
        }

        Ok(())
    }

    /// Terms of a kind linked to an idea, ordered by name
    pub async fn idea_terms(&self, idea_id: i32, kind: TechKind) -> Result<Vec<TechTerm>, DbErr> {
        let terms = match kind {
            TechKind::Technology => entity::prelude::Technology::find()
                .inner_join(entity::idea::Entity)
                .filter(entity::idea::Column::Id.eq(idea_id))
                .order_by_asc(entity::technology::Column::Name)
                .all(self.db)
                .await?
                .into_iter()
                .map(TechTerm::from)
                .collect(),
            TechKind::Framework => entity::prelude::Framework::find()
                .inner_join(entity::idea::Entity)
                .filter(entity::idea::Column::Id.eq(idea_id))
                .order_by_asc(entity::framework::Column::Name)
                .all(self.db)
                .await?
                .into_iter()
                .map(TechTerm::from)
                .collect(),
            TechKind::Specialization => entity::prelude::Specialization::find()
                .inner_join(entity::idea::Entity)
                .filter(entity::idea::Column::Id.eq(idea_id))
                .order_by_asc(entity::specialization::Column::Name)
                .all(self.db)
                .await?
                .into_iter()
                .map(TechTerm::from)
                .collect(),
        };

        Ok(terms)
    }

    /// Links an idea to terms of one kind
    ///
    /// Duplicate IDs are linked once. Linking a term the idea already has returns a [`DbErr`].
    pub async fn add_idea_links(
        &self,
        idea_id: i32,
        kind: TechKind,
        term_ids: &[i32],
    ) -> Result<(), DbErr> {
        let term_ids = unique_ids(term_ids);

        if term_ids.is_empty() {
            return Ok(());
        }

        match kind {
            TechKind::Technology => {
                entity::prelude::IdeaTechnology::insert_many(term_ids.into_iter().map(
                    |technology_id| entity::idea_technology::ActiveModel {
                        idea_id: ActiveValue::Set(idea_id),
                        technology_id: ActiveValue::Set(technology_id),
                    },
                ))
                .exec_without_returning(self.db)
                .await?;
            }
            TechKind::Framework => {
                entity::prelude::IdeaFramework::insert_many(term_ids.into_iter().map(
                    |framework_id| entity::idea_framework::ActiveModel {
                        idea_id: ActiveValue::Set(idea_id),
                        framework_id: ActiveValue::Set(framework_id),
                    },
                ))
                .exec_without_returning(self.db)
                .await?;
            }
            TechKind::Specialization => {
                entity::prelude::IdeaSpecialization::insert_many(term_ids.into_iter().map(
                    |specialization_id| entity::idea_specialization::ActiveModel {
                        idea_id: ActiveValue::Set(idea_id),
                        specialization_id: ActiveValue::Set(specialization_id),
                    },
                ))
                .exec_without_returning(self.db)
                .await?;
            }
        }

        Ok(())
    }
}

/// Removes repeated IDs keeping the first occurrence order
pub(crate) fn unique_ids(ids: &[i32]) -> Vec<i32> {
    let mut unique = Vec::with_capacity(ids.len());

    for id in ids {
        if !unique.contains(id) {
            unique.push(*id);
        }
    }

    unique
}

#[cfg(test)]
mod tests {

    mod create {
        use insparty_test_utils::prelude::*;

        use crate::server::{data::techstack::TechStackRepository, model::techstack::TechKind};

        /// Expect success when creating a term of each kind
        #[tokio::test]
        async fn creates_terms() -> Result<(), TestError> {
            let test = TestBuilder::new().with_techstack_tables().build().await?;

            let techstack_repo = TechStackRepository::new(&test.db);

            for kind in TechKind::ALL {
                let term = techstack_repo.create(kind, "Rust".to_string()).await?;
                assert_eq!(term.kind, kind);
                assert_eq!(term.name, "Rust");
            }

            Ok(())
        }

        /// Expect Error when creating a term with a name used by the same kind
        #[tokio::test]
        async fn fails_for_duplicate_name() -> Result<(), TestError> {
            let test = TestBuilder::new().with_technology("Rust").build().await?;

            let techstack_repo = TechStackRepository::new(&test.db);
            let result = techstack_repo
                .create(TechKind::Technology, "Rust".to_string())
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod list {
        use insparty_test_utils::prelude::*;

        use crate::server::{data::techstack::TechStackRepository, model::techstack::TechKind};

        /// Expect terms ordered by name
        #[tokio::test]
        async fn orders_by_name() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_framework("Tokio")
                .with_framework("Axum")
                .with_framework("Diesel")
                .build()
                .await?;

            let techstack_repo = TechStackRepository::new(&test.db);
            let names: Vec<String> = techstack_repo
                .list(TechKind::Framework)
                .await?
                .into_iter()
                .map(|term| term.name)
                .collect();

            assert_eq!(names, vec!["Axum", "Diesel", "Tokio"]);

            Ok(())
        }

        /// Expect Ok(Some(_)) only for existing names of the given kind
        #[tokio::test]
        async fn finds_by_name() -> Result<(), TestError> {
            let test = TestBuilder::new().with_technology("Rust").build().await?;

            let techstack_repo = TechStackRepository::new(&test.db);

            assert!(matches!(
                techstack_repo.find_by_name(TechKind::Technology, "Rust").await,
                Ok(Some(_))
            ));
            assert!(matches!(
                techstack_repo.find_by_name(TechKind::Framework, "Rust").await,
                Ok(None)
            ));

            Ok(())
        }
    }

    mod account_links {
        use insparty_test_utils::prelude::*;

        use crate::server::{data::techstack::TechStackRepository, model::techstack::TechKind};

        /// Expect previous links of the kind to be replaced and duplicates collapsed
        #[tokio::test]
        async fn replaces_links() -> Result<(), TestError> {
            let test = TestBuilder::new().with_techstack_tables().build().await?;
            let account = test.account().insert_account("johndoe").await?;
            let rust = test.techstack().insert_technology("Rust").await?;
            let go = test.techstack().insert_technology("Go").await?;
            test.techstack()
                .link_account_technology(account.id, rust.id)
                .await?;

            let techstack_repo = TechStackRepository::new(&test.db);
            techstack_repo
                .replace_account_links(account.id, TechKind::Technology, &[go.id, go.id])
                .await?;

            let terms = techstack_repo
                .account_terms(account.id, TechKind::Technology)
                .await?;

            assert_eq!(terms.len(), 1);
            assert_eq!(terms[0].name, "Go");

            Ok(())
        }

        /// Expect an empty list to remove every link of the kind
        #[tokio::test]
        async fn empty_list_clears_links() -> Result<(), TestError> {
            let test = TestBuilder::new().with_techstack_tables().build().await?;
            let account = test.account().insert_account("johndoe").await?;
            let rust = test.techstack().insert_technology("Rust").await?;
            test.techstack()
                .link_account_technology(account.id, rust.id)
                .await?;

            let techstack_repo = TechStackRepository::new(&test.db);
            techstack_repo
                .replace_account_links(account.id, TechKind::Technology, &[])
                .await?;

            assert!(techstack_repo
                .account_terms(account.id, TechKind::Technology)
                .await?
                .is_empty());

            Ok(())
        }

        /// Expect Error when linking a term that does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_term() -> Result<(), TestError> {
            let test = TestBuilder::new().with_techstack_tables().build().await?;
            let account = test.account().insert_account("johndoe").await?;

            let techstack_repo = TechStackRepository::new(&test.db);
            let result = techstack_repo
                .replace_account_links(account.id, TechKind::Specialization, &[42])
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod unique_ids {
        use crate::server::data::techstack::unique_ids;

        #[test]
        fn keeps_first_occurrence_order() {
            assert_eq!(unique_ids(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
        }
    }
}
