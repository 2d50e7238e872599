use sea_orm_migration::prelude::*;

mod m20250301_000001_create_schools;
mod m20250301_000002_create_classrooms;
mod m20250301_000003_create_employees;
mod m20250301_000004_create_students;
mod m20250301_000005_add_school_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_schools::Migration),
            Box::new(m20250301_000002_create_classrooms::Migration),
            Box::new(m20250301_000003_create_employees::Migration),
            Box::new(m20250301_000004_create_students::Migration),
            Box::new(m20250301_000005_add_school_indexes::Migration),
        ]
    }
}
