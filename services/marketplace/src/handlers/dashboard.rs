use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use fitmarket_auth_types::identity::IdentityHeaders;

use crate::domain::types::{ContentKind, Upload, UploadStats};
use crate::error::MarketplaceError;
use crate::handlers::purchase::PurchaseResponse;
use crate::handlers::user::ProfileResponse;
use crate::state::AppState;
use crate::usecase::dashboard::{Dashboard, DashboardUseCase};

#[derive(Serialize)]
pub struct UploadResponse {
    pub id: Uuid,
    pub content_type: ContentKind,
    pub title: String,
    pub description: String,
    #[serde(serialize_with = "fitmarket_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Upload> for UploadResponse {
    fn from(u: Upload) -> Self {
        Self {
            id: u.id,
            content_type: u.kind,
            title: u.title,
            description: u.description,
            created_at: u.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct ClientStats {
    pub total_purchases: usize,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum DashboardBody {
    Client {
        purchases: Vec<PurchaseResponse>,
        stats: ClientStats,
    },
    Professional {
        uploads: Vec<UploadResponse>,
        stats: UploadStats,
    },
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub profile: ProfileResponse,
    #[serde(flatten)]
    pub body: DashboardBody,
}

// ── GET /dashboard ───────────────────────────────────────────────────────────

pub async fn get_dashboard(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, MarketplaceError> {
    let session = state.session(identity.user_id).await?;
    let usecase = DashboardUseCase {
        purchases: state.purchase_repo(),
        resolver: state.content_resolver(),
        workouts: state.workout_repo(),
        nutrition: state.nutrition_repo(),
    };
    let body = match usecase.execute(&session, Utc::now()).await? {
        Dashboard::Client {
            purchases,
            total_purchases,
        } => DashboardBody::Client {
            purchases: purchases.into_iter().map(Into::into).collect(),
            stats: ClientStats { total_purchases },
        },
        Dashboard::Professional { uploads, stats } => DashboardBody::Professional {
            uploads: uploads.into_iter().map(Into::into).collect(),
            stats,
        },
    };
    Ok(Json(DashboardResponse {
        profile: session.user.into(),
        body,
    }))
}
