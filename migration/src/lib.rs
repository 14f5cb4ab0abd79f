pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_account_table;
mod m20260301_000002_create_founder_table;
mod m20260301_000003_create_finder_table;
mod m20260301_000004_create_techstack_tables;
mod m20260301_000005_create_account_techstack_tables;
mod m20260301_000006_create_idea_table;
mod m20260301_000007_create_idea_finder_table;
mod m20260301_000008_create_idea_techstack_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_account_table::Migration),
            Box::new(m20260301_000002_create_founder_table::Migration),
            Box::new(m20260301_000003_create_finder_table::Migration),
            Box::new(m20260301_000004_create_techstack_tables::Migration),
            Box::new(m20260301_000005_create_account_techstack_tables::Migration),
            Box::new(m20260301_000006_create_idea_table::Migration),
            Box::new(m20260301_000007_create_idea_finder_table::Migration),
            Box::new(m20260301_000008_create_idea_techstack_tables::Migration),
        ]
    }
}
