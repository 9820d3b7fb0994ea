use sea_orm_migration::prelude::*;

use crate::m20240305_000004_create_restaurants::Restaurant;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .if_not_exists()
                    .table(Dish::Table)
                    .col(
                        ColumnDef::new(Dish::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Dish::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Dish::Description).text().null())
                    .col(ColumnDef::new(Dish::Price).decimal_len(10, 2).not_null())
                    .col(ColumnDef::new(Dish::RestaurantId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dishes_restaurant_id")
                            .from(Dish::Table, Dish::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Dish::Table)
                    .col(Dish::RestaurantId)
                    .name("idx_dishes_restaurant_id")
                    .take(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Dish::Table).take())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Dish {
    #[sea_orm(iden = "dishes")]
    Table,
    Id,
    Name,
    Description,
    Price,
    RestaurantId,
}
