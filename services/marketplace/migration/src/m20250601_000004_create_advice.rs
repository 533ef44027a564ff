use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Advice::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Advice::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Advice::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Advice::Body).text().not_null())
                    .col(ColumnDef::new(Advice::VideoUrl).text().null())
                    .col(ColumnDef::new(Advice::Category).string_len(64).null())
                    .col(ColumnDef::new(Advice::AuthorId).uuid().not_null())
                    .col(
                        ColumnDef::new(Advice::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Advice::Table, Advice::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Advice::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Advice {
    Table,
    Id,
    Title,
    Body,
    VideoUrl,
    Category,
    AuthorId,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
