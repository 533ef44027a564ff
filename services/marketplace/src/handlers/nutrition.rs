use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use axum_extra::extract::Multipart;
use serde::Serialize;
use uuid::Uuid;

use fitmarket_auth_types::identity::IdentityHeaders;

use crate::domain::form::NUTRITION_PUBLISHERS;
use crate::domain::types::{Authored, NutritionPlan};
use crate::domain::validation::{AssetKind, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};
use crate::error::MarketplaceError;
use crate::handlers::form::{FieldSpec, FormResponse, form_view};
use crate::handlers::listing::{AuthorResponse, ListQuery, split_author};
use crate::handlers::multipart::FormFields;
use crate::state::AppState;
use crate::usecase::nutrition::{
    ListNutritionPlansUseCase, PublishNutritionPlanInput, PublishNutritionPlanUseCase,
};

#[derive(Serialize)]
pub struct NutritionPlanResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub document_url: String,
    pub author_name: String,
    pub author: Option<AuthorResponse>,
    #[serde(serialize_with = "fitmarket_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Authored<NutritionPlan>> for NutritionPlanResponse {
    fn from(row: Authored<NutritionPlan>) -> Self {
        let (p, author_name, author) = split_author(row);
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            document_url: p.document_url,
            author_name,
            author,
            created_at: p.created_at,
        }
    }
}

// ── GET /nutrition-plans ─────────────────────────────────────────────────────

pub async fn get_nutrition_plans(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<NutritionPlanResponse>>, MarketplaceError> {
    let usecase = ListNutritionPlansUseCase {
        repo: state.nutrition_repo(),
    };
    let rows = usecase.execute(query.author, query.page()).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

// ── POST /nutrition-plans ────────────────────────────────────────────────────

pub async fn create_nutrition_plan(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<NutritionPlanResponse>), MarketplaceError> {
    let session = state.session(identity.user_id).await?;
    let mut form = FormFields::read(multipart).await?;
    let usecase = PublishNutritionPlanUseCase {
        repo: state.nutrition_repo(),
        storage: state.storage(),
        bucket: state.buckets.documents.clone(),
    };
    let plan = usecase
        .execute(
            &session,
            PublishNutritionPlanInput {
                title: form.text("title"),
                description: form.text("description"),
                document: form.file("document"),
            },
        )
        .await?;
    let row = Authored {
        item: plan,
        author: Some(session.author()),
    };
    Ok((StatusCode::CREATED, Json(row.into())))
}

// ── GET /nutrition-plans/form ────────────────────────────────────────────────

pub async fn get_nutrition_plan_form(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<FormResponse>, MarketplaceError> {
    let session = state.session(identity.user_id).await?;
    Ok(Json(form_view(
        &session,
        NUTRITION_PUBLISHERS,
        vec![
            FieldSpec::text("title", TITLE_MAX_CHARS),
            FieldSpec::text("description", DESCRIPTION_MAX_CHARS),
            FieldSpec::file("document", AssetKind::NutritionDocument, true),
        ],
        vec![],
    )))
}
