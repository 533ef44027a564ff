use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkoutContent::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkoutContent::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WorkoutContent::Title).string_len(100).not_null())
                    .col(ColumnDef::new(WorkoutContent::Description).text().not_null())
                    .col(ColumnDef::new(WorkoutContent::VideoUrl).text().not_null())
                    .col(ColumnDef::new(WorkoutContent::AuthorId).uuid().not_null())
                    .col(
                        ColumnDef::new(WorkoutContent::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(WorkoutContent::Table, WorkoutContent::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkoutContent::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum WorkoutContent {
    Table,
    Id,
    Title,
    Description,
    VideoUrl,
    AuthorId,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
