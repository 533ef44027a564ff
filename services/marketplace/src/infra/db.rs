use anyhow::Context as _;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use fitmarket_domain::pagination::PageRequest;
use fitmarket_marketplace_schema::{advice, nutrition_plans, purchases, users, workout_content};

use crate::domain::repository::{
    AdviceRepository, ContentResolver, NutritionPlanRepository, PurchaseRepository,
    UserRepository, WorkoutRepository,
};
use crate::domain::types::{
    Advice, Author, Authored, ContentKind, ContentRef, MemberFilter, NutritionPlan, Purchase,
    ResolvedContent, Role, RoleCounts, UNKNOWN_AUTHOR, User, WorkoutContent,
};
use crate::error::MarketplaceError;

fn parse_role(raw: &str) -> anyhow::Result<Role> {
    raw.parse::<Role>().context("stored role")
}

fn user_from_model(model: users::Model) -> anyhow::Result<User> {
    Ok(User {
        role: parse_role(&model.role)?,
        id: model.id,
        name: model.name,
        avatar_url: model.avatar_url,
        created_at: model.created_at,
    })
}

fn author_from_model(model: Option<users::Model>) -> anyhow::Result<Option<Author>> {
    model
        .map(|m| {
            Ok(Author {
                role: parse_role(&m.role)?,
                id: m.id,
                name: m.name,
            })
        })
        .transpose()
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

#[derive(FromQueryResult)]
struct RoleCountRow {
    role: String,
    count: i64,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, MarketplaceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model).transpose()?)
    }

    async fn create(&self, user: &User) -> Result<(), MarketplaceError> {
        users::ActiveModel {
            id: Set(user.id),
            name: Set(user.name.clone()),
            role: Set(user.role.as_str().to_owned()),
            avatar_url: Set(user.avatar_url.clone()),
            created_at: Set(user.created_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }

    async fn update_avatar(
        &self,
        id: Uuid,
        avatar_url: Option<&str>,
    ) -> Result<(), MarketplaceError> {
        users::ActiveModel {
            id: Set(id),
            avatar_url: Set(avatar_url.map(str::to_owned)),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update user avatar")?;
        Ok(())
    }

    async fn list(&self, filter: &MemberFilter) -> Result<Vec<User>, MarketplaceError> {
        let mut query = users::Entity::find();
        if let Some(role) = filter.role {
            query = query.filter(users::Column::Role.eq(role.as_str()));
        }
        if let Some(search) = filter.search.as_deref() {
            let pattern = format!("%{}%", escape_like(&search.to_lowercase()));
            let lowered_name = Func::lower(Expr::col(users::Column::Name));
            query = query.filter(Expr::expr(lowered_name).like(pattern));
        }
        let models = query
            .order_by_desc(users::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models
            .into_iter()
            .map(user_from_model)
            .collect::<anyhow::Result<_>>()?)
    }

    async fn count_by_role(&self) -> Result<RoleCounts, MarketplaceError> {
        let rows = users::Entity::find()
            .select_only()
            .column(users::Column::Role)
            .column_as(Expr::col(users::Column::Id).count(), "count")
            .group_by(users::Column::Role)
            .into_model::<RoleCountRow>()
            .all(&self.db)
            .await
            .context("count users by role")?;
        let mut counts = RoleCounts::default();
        for row in rows {
            counts.add(parse_role(&row.role)?, row.count.max(0) as u64);
        }
        Ok(counts)
    }
}

fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

// ── Workout repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbWorkoutRepository {
    pub db: DatabaseConnection,
}

fn workout_from_model(m: workout_content::Model) -> WorkoutContent {
    WorkoutContent {
        id: m.id,
        title: m.title,
        description: m.description,
        video_url: m.video_url,
        author_id: m.author_id,
        created_at: m.created_at,
    }
}

impl WorkoutRepository for DbWorkoutRepository {
    async fn list(
        &self,
        author_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<Authored<WorkoutContent>>, MarketplaceError> {
        let mut query = workout_content::Entity::find();
        if let Some(author_id) = author_id {
            query = query.filter(workout_content::Column::AuthorId.eq(author_id));
        }
        let rows = query
            .order_by_desc(workout_content::Column::CreatedAt)
            .limit(page.limit())
            .offset(page.offset())
            .find_also_related(users::Entity)
            .all(&self.db)
            .await
            .context("list workouts")?;
        let mut out = Vec::with_capacity(rows.len());
        for (workout, author) in rows {
            out.push(Authored {
                item: workout_from_model(workout),
                author: author_from_model(author)?,
            });
        }
        Ok(out)
    }

    async fn list_by_author(
        &self,
        author_id: Uuid,
    ) -> Result<Vec<WorkoutContent>, MarketplaceError> {
        let models = workout_content::Entity::find()
            .filter(workout_content::Column::AuthorId.eq(author_id))
            .order_by_desc(workout_content::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list workouts by author")?;
        Ok(models.into_iter().map(workout_from_model).collect())
    }

    async fn create(&self, workout: &WorkoutContent) -> Result<(), MarketplaceError> {
        workout_content::ActiveModel {
            id: Set(workout.id),
            title: Set(workout.title.clone()),
            description: Set(workout.description.clone()),
            video_url: Set(workout.video_url.clone()),
            author_id: Set(workout.author_id),
            created_at: Set(workout.created_at),
        }
        .insert(&self.db)
        .await
        .context("insert workout")?;
        Ok(())
    }
}

// ── Nutrition plan repository ────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbNutritionPlanRepository {
    pub db: DatabaseConnection,
}

fn plan_from_model(m: nutrition_plans::Model) -> NutritionPlan {
    NutritionPlan {
        id: m.id,
        title: m.title,
        description: m.description,
        document_url: m.document_url,
        author_id: m.author_id,
        created_at: m.created_at,
    }
}

impl NutritionPlanRepository for DbNutritionPlanRepository {
    async fn list(
        &self,
        author_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<Authored<NutritionPlan>>, MarketplaceError> {
        let mut query = nutrition_plans::Entity::find();
        if let Some(author_id) = author_id {
            query = query.filter(nutrition_plans::Column::AuthorId.eq(author_id));
        }
        let rows = query
            .order_by_desc(nutrition_plans::Column::CreatedAt)
            .limit(page.limit())
            .offset(page.offset())
            .find_also_related(users::Entity)
            .all(&self.db)
            .await
            .context("list nutrition plans")?;
        let mut out = Vec::with_capacity(rows.len());
        for (plan, author) in rows {
            out.push(Authored {
                item: plan_from_model(plan),
                author: author_from_model(author)?,
            });
        }
        Ok(out)
    }

    async fn list_by_author(
        &self,
        author_id: Uuid,
    ) -> Result<Vec<NutritionPlan>, MarketplaceError> {
        let models = nutrition_plans::Entity::find()
            .filter(nutrition_plans::Column::AuthorId.eq(author_id))
            .order_by_desc(nutrition_plans::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list nutrition plans by author")?;
        Ok(models.into_iter().map(plan_from_model).collect())
    }

    async fn create(&self, plan: &NutritionPlan) -> Result<(), MarketplaceError> {
        nutrition_plans::ActiveModel {
            id: Set(plan.id),
            title: Set(plan.title.clone()),
            description: Set(plan.description.clone()),
            document_url: Set(plan.document_url.clone()),
            author_id: Set(plan.author_id),
            created_at: Set(plan.created_at),
        }
        .insert(&self.db)
        .await
        .context("insert nutrition plan")?;
        Ok(())
    }
}

// ── Advice repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAdviceRepository {
    pub db: DatabaseConnection,
}

impl AdviceRepository for DbAdviceRepository {
    async fn list(
        &self,
        author_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<Authored<Advice>>, MarketplaceError> {
        let mut query = advice::Entity::find();
        if let Some(author_id) = author_id {
            query = query.filter(advice::Column::AuthorId.eq(author_id));
        }
        let rows = query
            .order_by_desc(advice::Column::CreatedAt)
            .limit(page.limit())
            .offset(page.offset())
            .find_also_related(users::Entity)
            .all(&self.db)
            .await
            .context("list advice")?;
        let mut out = Vec::with_capacity(rows.len());
        for (m, author) in rows {
            out.push(Authored {
                item: Advice {
                    id: m.id,
                    title: m.title,
                    body: m.body,
                    video_url: m.video_url,
                    category: m.category,
                    author_id: m.author_id,
                    created_at: m.created_at,
                },
                author: author_from_model(author)?,
            });
        }
        Ok(out)
    }

    async fn create(&self, item: &Advice) -> Result<(), MarketplaceError> {
        advice::ActiveModel {
            id: Set(item.id),
            title: Set(item.title.clone()),
            body: Set(item.body.clone()),
            video_url: Set(item.video_url.clone()),
            category: Set(item.category.clone()),
            author_id: Set(item.author_id),
            created_at: Set(item.created_at),
        }
        .insert(&self.db)
        .await
        .context("insert advice")?;
        Ok(())
    }
}

// ── Purchase repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPurchaseRepository {
    pub db: DatabaseConnection,
}

fn purchase_from_model(m: purchases::Model) -> anyhow::Result<Purchase> {
    let kind = m
        .content_type
        .parse::<ContentKind>()
        .context("stored content type")?;
    Ok(Purchase {
        id: m.id,
        buyer_id: m.buyer_id,
        content: ContentRef::new(kind, m.content_id),
        created_at: m.created_at,
    })
}

impl PurchaseRepository for DbPurchaseRepository {
    async fn create(&self, purchase: &Purchase) -> Result<(), MarketplaceError> {
        purchases::ActiveModel {
            id: Set(purchase.id),
            buyer_id: Set(purchase.buyer_id),
            content_type: Set(purchase.content.kind().as_str().to_owned()),
            content_id: Set(purchase.content.id()),
            created_at: Set(purchase.created_at),
        }
        .insert(&self.db)
        .await
        .context("insert purchase")?;
        Ok(())
    }

    async fn list_by_buyer(&self, buyer_id: Uuid) -> Result<Vec<Purchase>, MarketplaceError> {
        let models = purchases::Entity::find()
            .filter(purchases::Column::BuyerId.eq(buyer_id))
            .order_by_desc(purchases::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list purchases")?;
        Ok(models
            .into_iter()
            .map(purchase_from_model)
            .collect::<anyhow::Result<_>>()?)
    }
}

// ── Content resolver ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbContentResolver {
    pub db: DatabaseConnection,
}

fn author_name(author: Option<users::Model>) -> String {
    author.map_or_else(|| UNKNOWN_AUTHOR.to_owned(), |a| a.name)
}

impl ContentResolver for DbContentResolver {
    async fn resolve(
        &self,
        content: &ContentRef,
    ) -> Result<Option<ResolvedContent>, MarketplaceError> {
        let resolved = match *content {
            ContentRef::Workout(id) => workout_content::Entity::find_by_id(id)
                .find_also_related(users::Entity)
                .one(&self.db)
                .await
                .context("resolve workout")?
                .map(|(w, author)| ResolvedContent {
                    title: w.title,
                    description: w.description,
                    author_name: author_name(author),
                }),
            ContentRef::Nutrition(id) => nutrition_plans::Entity::find_by_id(id)
                .find_also_related(users::Entity)
                .one(&self.db)
                .await
                .context("resolve nutrition plan")?
                .map(|(p, author)| ResolvedContent {
                    title: p.title,
                    description: p.description,
                    author_name: author_name(author),
                }),
        };
        Ok(resolved)
    }
}

// ── Readiness ────────────────────────────────────────────────────────────────

pub async fn ping(db: &DatabaseConnection) -> bool {
    match db.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "database ping failed");
            false
        }
    }
}
