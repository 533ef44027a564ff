use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::Multipart;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fitmarket_auth_types::identity::IdentityHeaders;

use crate::domain::types::{Role, User};
use crate::error::MarketplaceError;
use crate::handlers::multipart::FormFields;
use crate::state::AppState;
use crate::usecase::user::{RegisterUserInput, RegisterUserUseCase, UpdateAvatarUseCase};

#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    pub role_label: &'static str,
    pub avatar_url: Option<String>,
    #[serde(serialize_with = "fitmarket_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            role: user.role,
            role_label: user.role.label(),
            avatar_url: user.avatar_url,
            created_at: user.created_at,
        }
    }
}

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub role: Role,
}

pub async fn create_user(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), MarketplaceError> {
    let usecase = RegisterUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(RegisterUserInput {
            user_id: identity.user_id,
            name: body.name,
            role: body.role,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── GET /users/@me ───────────────────────────────────────────────────────────

pub async fn get_me(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, MarketplaceError> {
    let session = state.session(identity.user_id).await?;
    Ok(Json(session.user.into()))
}

// ── PUT /users/@me/avatar ────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AvatarResponse {
    pub avatar_url: String,
}

pub async fn update_avatar(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AvatarResponse>, MarketplaceError> {
    let session = state.session(identity.user_id).await?;
    let mut form = FormFields::read(multipart).await?;
    let usecase = UpdateAvatarUseCase {
        repo: state.user_repo(),
        storage: state.storage(),
        bucket: state.buckets.avatars.clone(),
    };
    let avatar_url = usecase.execute(&session, form.file("file")).await?;
    Ok(Json(AvatarResponse { avatar_url }))
}
