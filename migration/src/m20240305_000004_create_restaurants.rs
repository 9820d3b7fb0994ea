use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .if_not_exists()
                    .table(Restaurant::Table)
                    .col(
                        ColumnDef::new(Restaurant::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Restaurant::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Restaurant::Description).text().null())
                    .col(ColumnDef::new(Restaurant::Category).string().null())
                    .col(
                        ColumnDef::new(Restaurant::HasDelivery)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Restaurant::ContactEmail).string().null())
                    // Not a foreign key; the creating user may be gone.
                    .col(ColumnDef::new(Restaurant::CreatedById).integer().null())
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Restaurant::Table)
                    .col(Restaurant::Name)
                    .name("idx_restaurants_name")
                    .take(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Restaurant::Table).take())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Restaurant {
    #[sea_orm(iden = "restaurants")]
    Table,
    Id,
    Name,
    Description,
    Category,
    HasDelivery,
    ContactEmail,
    CreatedById,
}
