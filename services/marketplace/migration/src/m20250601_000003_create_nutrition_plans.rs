use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NutritionPlans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NutritionPlans::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(NutritionPlans::Title).string_len(100).not_null())
                    .col(ColumnDef::new(NutritionPlans::Description).text().not_null())
                    .col(ColumnDef::new(NutritionPlans::DocumentUrl).text().not_null())
                    .col(ColumnDef::new(NutritionPlans::AuthorId).uuid().not_null())
                    .col(
                        ColumnDef::new(NutritionPlans::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(NutritionPlans::Table, NutritionPlans::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NutritionPlans::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum NutritionPlans {
    Table,
    Id,
    Title,
    Description,
    DocumentUrl,
    AuthorId,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
