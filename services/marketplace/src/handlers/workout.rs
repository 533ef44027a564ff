use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use axum_extra::extract::Multipart;
use serde::Serialize;
use uuid::Uuid;

use fitmarket_auth_types::identity::IdentityHeaders;

use crate::domain::form::WORKOUT_PUBLISHERS;
use crate::domain::types::{Authored, VideoSource, WorkoutContent};
use crate::domain::validation::{AssetKind, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};
use crate::error::MarketplaceError;
use crate::handlers::form::{FieldSpec, FormResponse, form_view};
use crate::handlers::listing::{AuthorResponse, ListQuery, split_author};
use crate::handlers::multipart::FormFields;
use crate::state::AppState;
use crate::usecase::workout::{ListWorkoutsUseCase, PublishWorkoutInput, PublishWorkoutUseCase};

#[derive(Serialize)]
pub struct WorkoutResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub video_source: VideoSource,
    pub author_name: String,
    pub author: Option<AuthorResponse>,
    #[serde(serialize_with = "fitmarket_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Authored<WorkoutContent>> for WorkoutResponse {
    fn from(row: Authored<WorkoutContent>) -> Self {
        let (w, author_name, author) = split_author(row);
        Self {
            id: w.id,
            video_source: VideoSource::of(&w.video_url),
            title: w.title,
            description: w.description,
            video_url: w.video_url,
            author_name,
            author,
            created_at: w.created_at,
        }
    }
}

// ── GET /workouts ────────────────────────────────────────────────────────────

pub async fn get_workouts(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<WorkoutResponse>>, MarketplaceError> {
    let usecase = ListWorkoutsUseCase {
        repo: state.workout_repo(),
    };
    let rows = usecase.execute(query.author, query.page()).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

// ── POST /workouts ───────────────────────────────────────────────────────────

pub async fn create_workout(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<WorkoutResponse>), MarketplaceError> {
    let session = state.session(identity.user_id).await?;
    let mut form = FormFields::read(multipart).await?;
    let usecase = PublishWorkoutUseCase {
        repo: state.workout_repo(),
        storage: state.storage(),
        bucket: state.buckets.videos.clone(),
    };
    let workout = usecase
        .execute(
            &session,
            PublishWorkoutInput {
                title: form.text("title"),
                description: form.text("description"),
                video_url: form.text("video_url"),
                video: form.file("video"),
            },
        )
        .await?;
    let row = Authored {
        item: workout,
        author: Some(session.author()),
    };
    Ok((StatusCode::CREATED, Json(row.into())))
}

// ── GET /workouts/form ───────────────────────────────────────────────────────

pub async fn get_workout_form(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<FormResponse>, MarketplaceError> {
    let session = state.session(identity.user_id).await?;
    Ok(Json(form_view(
        &session,
        WORKOUT_PUBLISHERS,
        vec![
            FieldSpec::text("title", TITLE_MAX_CHARS),
            FieldSpec::text("description", DESCRIPTION_MAX_CHARS),
            FieldSpec::optional("video_url"),
            FieldSpec::file("video", AssetKind::WorkoutVideo, false),
        ],
        vec![],
    )))
}
