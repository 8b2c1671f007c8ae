pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_ufc_events_table;
mod m20250601_000002_create_ufc_notify_channels_table;
mod m20250601_000003_create_wall_of_shame_table;
mod m20250601_000004_create_response_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_ufc_events_table::Migration),
            Box::new(m20250601_000002_create_ufc_notify_channels_table::Migration),
            Box::new(m20250601_000003_create_wall_of_shame_table::Migration),
            Box::new(m20250601_000004_create_response_table::Migration),
        ]
    }
}
