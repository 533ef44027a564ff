use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(WorkoutContent::Table)
                    .col(WorkoutContent::AuthorId)
                    .name("idx_workout_content_author_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(NutritionPlans::Table)
                    .col(NutritionPlans::AuthorId)
                    .name("idx_nutrition_plans_author_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Advice::Table)
                    .col(Advice::AuthorId)
                    .name("idx_advice_author_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Purchases::Table)
                    .col(Purchases::BuyerId)
                    .name("idx_purchases_buyer_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_purchases_buyer_id",
            "idx_advice_author_id",
            "idx_nutrition_plans_author_id",
            "idx_workout_content_author_id",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(Iden)]
enum WorkoutContent {
    Table,
    AuthorId,
}

#[derive(Iden)]
enum NutritionPlans {
    Table,
    AuthorId,
}

#[derive(Iden)]
enum Advice {
    Table,
    AuthorId,
}

#[derive(Iden)]
enum Purchases {
    Table,
    BuyerId,
}
