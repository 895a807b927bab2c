pub use sea_orm_migration::prelude::*;

mod m20250612_000001_create_table_users;
mod m20250613_000002_create_profile_tables;
mod m20250614_000003_create_course_tables;
mod m20250615_000004_create_messaging_tables;
mod m20250616_000005_create_calendar_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250612_000001_create_table_users::Migration),
            Box::new(m20250613_000002_create_profile_tables::Migration),
            Box::new(m20250614_000003_create_course_tables::Migration),
            Box::new(m20250615_000004_create_messaging_tables::Migration),
            Box::new(m20250616_000005_create_calendar_tables::Migration),
        ]
    }
}
