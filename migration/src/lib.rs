pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_bugs_table;

pub struct BugMigrator;

#[async_trait::async_trait]
impl MigratorTrait for BugMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_bugs_table::Migration),
        ]
    }
}
