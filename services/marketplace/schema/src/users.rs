use sea_orm::entity::prelude::*;

/// Marketplace member. `id` is the identity-provider subject.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    /// `client`, `trainer` or `nutritionist`.
    pub role: String,
    pub avatar_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::workout_content::Entity")]
    WorkoutContent,
    #[sea_orm(has_many = "super::nutrition_plans::Entity")]
    NutritionPlans,
    #[sea_orm(has_many = "super::advice::Entity")]
    Advice,
    #[sea_orm(has_many = "super::purchases::Entity")]
    Purchases,
}

impl Related<super::workout_content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkoutContent.def()
    }
}

impl Related<super::nutrition_plans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NutritionPlans.def()
    }
}

impl Related<super::advice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Advice.def()
    }
}

impl Related<super::purchases::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Purchases.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
