use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fitmarket_auth_types::identity::IdentityHeaders;

use crate::domain::types::{CatalogEntry, ContentKind, ContentRef, Purchase, PurchaseDetails};
use crate::error::MarketplaceError;
use crate::state::AppState;
use crate::usecase::purchase::{CreatePurchaseUseCase, ListCatalogUseCase, ListPurchasesUseCase};

// ── GET /purchases/catalog ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CatalogQuery {
    pub kind: ContentKind,
    #[serde(rename = "per-page")]
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

#[derive(Serialize)]
pub struct CatalogEntryResponse {
    pub content_type: ContentKind,
    pub content_id: Uuid,
    pub label: &'static str,
    pub title: String,
    pub description: String,
    pub author_name: String,
    #[serde(serialize_with = "fitmarket_core::serde::cents_as_decimal")]
    pub price: u32,
}

impl From<CatalogEntry> for CatalogEntryResponse {
    fn from(e: CatalogEntry) -> Self {
        Self {
            content_type: e.content.kind(),
            content_id: e.content.id(),
            label: e.content.kind().label(),
            title: e.title,
            description: e.description,
            author_name: e.author_name,
            price: e.price_cents,
        }
    }
}

pub async fn get_catalog(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Vec<CatalogEntryResponse>>, MarketplaceError> {
    let session = state.session(identity.user_id).await?;
    let usecase = ListCatalogUseCase {
        workouts: state.workout_repo(),
        nutrition: state.nutrition_repo(),
    };
    let page = fitmarket_domain::pagination::PageRequest::new(query.per_page, query.page);
    let entries = usecase.execute(&session, query.kind, page).await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

// ── GET /purchases ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct PurchaseResponse {
    pub id: Uuid,
    pub content_type: ContentKind,
    pub content_id: Uuid,
    /// `false` when the purchased row no longer exists.
    pub available: bool,
    pub title: String,
    pub description: Option<String>,
    pub author_name: Option<String>,
    #[serde(serialize_with = "fitmarket_core::serde::cents_as_decimal")]
    pub price: u32,
    #[serde(serialize_with = "fitmarket_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<PurchaseDetails> for PurchaseResponse {
    fn from(d: PurchaseDetails) -> Self {
        let title = d.title().to_owned();
        let Purchase {
            id,
            content,
            created_at,
            ..
        } = d.purchase;
        Self {
            id,
            content_type: content.kind(),
            content_id: content.id(),
            available: d.content.is_some(),
            title,
            description: d.content.as_ref().map(|c| c.description.clone()),
            author_name: d.content.map(|c| c.author_name),
            price: content.price_cents(),
            created_at,
        }
    }
}

pub async fn get_purchases(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<PurchaseResponse>>, MarketplaceError> {
    let session = state.session(identity.user_id).await?;
    let usecase = ListPurchasesUseCase {
        purchases: state.purchase_repo(),
        resolver: state.content_resolver(),
    };
    let details = usecase.execute(&session).await?;
    Ok(Json(details.into_iter().map(Into::into).collect()))
}

// ── POST /purchases ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreatePurchaseRequest {
    pub content_type: ContentKind,
    pub content_id: Uuid,
}

#[derive(Serialize)]
pub struct CreatedPurchaseResponse {
    pub id: Uuid,
    pub content_type: ContentKind,
    pub content_id: Uuid,
    #[serde(serialize_with = "fitmarket_core::serde::cents_as_decimal")]
    pub price: u32,
    #[serde(serialize_with = "fitmarket_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub async fn create_purchase(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreatePurchaseRequest>,
) -> Result<(StatusCode, Json<CreatedPurchaseResponse>), MarketplaceError> {
    let session = state.session(identity.user_id).await?;
    let usecase = CreatePurchaseUseCase {
        purchases: state.purchase_repo(),
        resolver: state.content_resolver(),
        payment_delay: state.payment_delay,
    };
    let purchase = usecase
        .execute(&session, ContentRef::new(body.content_type, body.content_id))
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedPurchaseResponse {
            id: purchase.id,
            content_type: purchase.content.kind(),
            content_id: purchase.content.id(),
            price: purchase.content.price_cents(),
            created_at: purchase.created_at,
        }),
    ))
}
