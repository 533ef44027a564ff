use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users;
mod m20250601_000002_create_workout_content;
mod m20250601_000003_create_nutrition_plans;
mod m20250601_000004_create_advice;
mod m20250601_000005_create_purchases;
mod m20250601_000006_add_author_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users::Migration),
            Box::new(m20250601_000002_create_workout_content::Migration),
            Box::new(m20250601_000003_create_nutrition_plans::Migration),
            Box::new(m20250601_000004_create_advice::Migration),
            Box::new(m20250601_000005_create_purchases::Migration),
            Box::new(m20250601_000006_add_author_indexes::Migration),
        ]
    }
}
