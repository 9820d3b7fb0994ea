pub use sea_orm_migration::prelude::*;

mod m20240305_000001_create_extensions;
mod m20240305_000002_create_users;
mod m20240305_000003_create_tokens;
mod m20240305_000004_create_restaurants;
mod m20240305_000005_create_dishes;

pub use m20240305_000002_create_users::User;
pub use m20240305_000003_create_tokens::Token;
pub use m20240305_000004_create_restaurants::Restaurant;
pub use m20240305_000005_create_dishes::Dish;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240305_000001_create_extensions::Migration),
            Box::new(m20240305_000002_create_users::Migration),
            Box::new(m20240305_000003_create_tokens::Migration),
            Box::new(m20240305_000004_create_restaurants::Migration),
            Box::new(m20240305_000005_create_dishes::Migration),
        ]
    }
}
