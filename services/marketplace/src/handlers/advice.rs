use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fitmarket_auth_types::identity::IdentityHeaders;

use crate::domain::form::ADVICE_PUBLISHERS;
use crate::domain::types::{Advice, Authored, advice_categories, category_label};
use crate::domain::validation::{ADVICE_BODY_MAX_CHARS, TITLE_MAX_CHARS};
use crate::error::MarketplaceError;
use crate::handlers::form::{FieldSpec, FormResponse, form_view};
use crate::handlers::listing::{AuthorResponse, ListQuery, split_author};
use crate::state::AppState;
use crate::usecase::advice::{ListAdviceUseCase, PublishAdviceInput, PublishAdviceUseCase};

#[derive(Serialize)]
pub struct AdviceResponse {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub video_url: Option<String>,
    pub category: Option<String>,
    pub category_label: String,
    pub author_name: String,
    pub author: Option<AuthorResponse>,
    #[serde(serialize_with = "fitmarket_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Authored<Advice>> for AdviceResponse {
    fn from(row: Authored<Advice>) -> Self {
        let (a, author_name, author) = split_author(row);
        Self {
            id: a.id,
            category_label: category_label(a.category.as_deref()),
            title: a.title,
            body: a.body,
            video_url: a.video_url,
            category: a.category,
            author_name,
            author,
            created_at: a.created_at,
        }
    }
}

// ── GET /advice ──────────────────────────────────────────────────────────────

pub async fn get_advice(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<AdviceResponse>>, MarketplaceError> {
    let usecase = ListAdviceUseCase {
        repo: state.advice_repo(),
    };
    let rows = usecase.execute(query.author, query.page()).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

// ── POST /advice ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateAdviceRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub video_url: Option<String>,
    pub category: Option<String>,
}

pub async fn create_advice(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateAdviceRequest>,
) -> Result<(StatusCode, Json<AdviceResponse>), MarketplaceError> {
    let session = state.session(identity.user_id).await?;
    let usecase = PublishAdviceUseCase {
        repo: state.advice_repo(),
    };
    let advice = usecase
        .execute(
            &session,
            PublishAdviceInput {
                title: body.title,
                body: body.body,
                video_url: body.video_url,
                category: body.category,
            },
        )
        .await?;
    let row = Authored {
        item: advice,
        author: Some(session.author()),
    };
    Ok((StatusCode::CREATED, Json(row.into())))
}

// ── GET /advice/form ─────────────────────────────────────────────────────────

pub async fn get_advice_form(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<FormResponse>, MarketplaceError> {
    let session = state.session(identity.user_id).await?;
    Ok(Json(form_view(
        &session,
        ADVICE_PUBLISHERS,
        vec![
            FieldSpec::text("title", TITLE_MAX_CHARS),
            FieldSpec::text("body", ADVICE_BODY_MAX_CHARS),
            FieldSpec::optional("video_url"),
            FieldSpec::optional("category"),
        ],
        advice_categories(session.role()),
    )))
}
