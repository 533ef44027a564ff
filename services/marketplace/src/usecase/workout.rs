use chrono::Utc;
use uuid::Uuid;

use fitmarket_domain::pagination::PageRequest;

use crate::domain::form::WORKOUT_PUBLISHERS;
use crate::domain::repository::{ObjectStorage, WorkoutRepository};
use crate::domain::types::{Authored, Session, WorkoutContent};
use crate::domain::validation::{
    AssetKind, DESCRIPTION_MAX_CHARS, FileUpload, TITLE_MAX_CHARS, ValidationError,
    optional_text, required_text, youtube_url,
};
use crate::error::MarketplaceError;
use crate::usecase::publish::{gated, remove_orphan};

// ── ListWorkouts ─────────────────────────────────────────────────────────────

pub struct ListWorkoutsUseCase<R: WorkoutRepository> {
    pub repo: R,
}

impl<R: WorkoutRepository> ListWorkoutsUseCase<R> {
    pub async fn execute(
        &self,
        author_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<Authored<WorkoutContent>>, MarketplaceError> {
        self.repo.list(author_id, page.clamped()).await
    }
}

// ── PublishWorkout ───────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct PublishWorkoutInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub video: Option<FileUpload>,
}

enum VideoSourceInput {
    Youtube(String),
    File(FileUpload),
}

pub struct PublishWorkoutUseCase<R: WorkoutRepository, S: ObjectStorage> {
    pub repo: R,
    pub storage: S,
    pub bucket: String,
}

impl<R: WorkoutRepository, S: ObjectStorage> PublishWorkoutUseCase<R, S> {
    pub async fn execute(
        &self,
        session: &Session,
        input: PublishWorkoutInput,
    ) -> Result<WorkoutContent, MarketplaceError> {
        gated(
            session,
            WORKOUT_PUBLISHERS,
            "workout",
            self.publish(session, input),
        )
        .await
    }

    async fn publish(
        &self,
        session: &Session,
        input: PublishWorkoutInput,
    ) -> Result<WorkoutContent, MarketplaceError> {
        let title = required_text("title", input.title.as_deref(), TITLE_MAX_CHARS)?;
        let description = required_text(
            "description",
            input.description.as_deref(),
            DESCRIPTION_MAX_CHARS,
        )?;
        let source = match (optional_text(input.video_url.as_deref()), input.video) {
            (Some(_), Some(_)) => return Err(ValidationError::AmbiguousVideo.into()),
            (Some(url), None) => VideoSourceInput::Youtube(youtube_url("video_url", &url)?),
            (None, Some(file)) => {
                AssetKind::WorkoutVideo.check("video", &file)?;
                VideoSourceInput::File(file)
            }
            (None, None) => return Err(ValidationError::Missing { field: "video" }.into()),
        };

        let now = Utc::now();
        let mut workout = WorkoutContent {
            id: Uuid::now_v7(),
            title,
            description,
            video_url: String::new(),
            author_id: session.user_id(),
            created_at: now,
        };

        match source {
            VideoSourceInput::Youtube(url) => {
                workout.video_url = url;
                self.repo.create(&workout).await?;
            }
            VideoSourceInput::File(file) => {
                let name = AssetKind::WorkoutVideo.object_name(session.user_id(), now, &file);
                self.storage
                    .upload(&self.bucket, &name, &file.content_type, file.bytes)
                    .await?;
                workout.video_url = self.storage.public_url(&self.bucket, &name);
                if let Err(e) = self.repo.create(&workout).await {
                    remove_orphan(&self.storage, &self.bucket, &name).await;
                    return Err(e);
                }
            }
        }
        Ok(workout)
    }
}
