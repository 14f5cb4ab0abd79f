//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Table groups depend on each other: techstack tables include the account tables, idea tables
/// include both. Tables are always created in foreign key order.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_account_tables: bool,
    include_techstack_tables: bool,
    include_idea_tables: bool,

    // Database fixtures to insert
    accounts: Vec<String>,
    technologies: Vec<String>,
    frameworks: Vec<String>,
    specializations: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_account_tables: false,
            include_techstack_tables: false,
            include_idea_tables: false,
            accounts: Vec::new(),
            technologies: Vec::new(),
            frameworks: Vec::new(),
            specializations: Vec::new(),
        }
    }

    /// Add the account, founder and finder tables.
    pub fn with_account_tables(mut self) -> Self {
        self.include_account_tables = true;
        self
    }

    /// Add the technology, framework and specialization tables with their account links.
    ///
    /// Implies [`with_account_tables`](Self::with_account_tables).
    pub fn with_techstack_tables(mut self) -> Self {
        self.include_account_tables = true;
        self.include_techstack_tables = true;
        self
    }

    /// Add the idea table with its finder and taxonomy links.
    ///
    /// Implies [`with_techstack_tables`](Self::with_techstack_tables).
    pub fn with_idea_tables(mut self) -> Self {
        self.include_account_tables = true;
        self.include_techstack_tables = true;
        self.include_idea_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Custom tables are created after the table groups.
    ///
    /// ```no_run
    /// use insparty_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), insparty_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Technology)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an account with its founder and finder records.
    ///
    /// The e-mail address is `{username}@example.com`.
    pub fn with_account(mut self, username: impl Into<String>) -> Self {
        self.include_account_tables = true;
        self.accounts.push(username.into());
        self
    }

    pub fn with_technology(mut self, name: impl Into<String>) -> Self {
        self = self.with_techstack_tables();
        self.technologies.push(name.into());
        self
    }

    pub fn with_framework(mut self, name: impl Into<String>) -> Self {
        self = self.with_techstack_tables();
        self.frameworks.push(name.into());
        self
    }

    pub fn with_specialization(mut self, name: impl Into<String>) -> Self {
        self = self.with_techstack_tables();
        self.specializations.push(name.into());
        self
    }

    /// Build the test context.
    ///
    /// Executes all queued operations in order:
    /// 1. Create tables
    /// 2. Insert database fixtures
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_account_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Account),
                schema.create_table_from_entity(entity::prelude::Founder),
                schema.create_table_from_entity(entity::prelude::Finder),
            ]);
        }

        if self.include_techstack_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Technology),
                schema.create_table_from_entity(entity::prelude::Framework),
                schema.create_table_from_entity(entity::prelude::Specialization),
                schema.create_table_from_entity(entity::prelude::AccountTechnology),
                schema.create_table_from_entity(entity::prelude::AccountFramework),
                schema.create_table_from_entity(entity::prelude::AccountSpecialization),
            ]);
        }

        if self.include_idea_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Idea),
                schema.create_table_from_entity(entity::prelude::IdeaFinder),
                schema.create_table_from_entity(entity::prelude::IdeaTechnology),
                schema.create_table_from_entity(entity::prelude::IdeaFramework),
                schema.create_table_from_entity(entity::prelude::IdeaSpecialization),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for username in &self.accounts {
            setup.account().insert_account_with_roles(username).await?;
        }

        for name in &self.technologies {
            setup.techstack().insert_technology(name).await?;
        }

        for name in &self.frameworks {
            setup.techstack().insert_framework(name).await?;
        }

        for name in &self.specializations {
            setup.techstack().insert_specialization(name).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
