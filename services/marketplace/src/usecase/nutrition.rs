use chrono::Utc;
use uuid::Uuid;

use fitmarket_domain::pagination::PageRequest;

use crate::domain::form::NUTRITION_PUBLISHERS;
use crate::domain::repository::{NutritionPlanRepository, ObjectStorage};
use crate::domain::types::{Authored, NutritionPlan, Session};
use crate::domain::validation::{
    AssetKind, DESCRIPTION_MAX_CHARS, FileUpload, TITLE_MAX_CHARS, ValidationError,
    required_text,
};
use crate::error::MarketplaceError;
use crate::usecase::publish::{gated, remove_orphan};

// ── ListNutritionPlans ───────────────────────────────────────────────────────

pub struct ListNutritionPlansUseCase<R: NutritionPlanRepository> {
    pub repo: R,
}

impl<R: NutritionPlanRepository> ListNutritionPlansUseCase<R> {
    pub async fn execute(
        &self,
        author_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<Authored<NutritionPlan>>, MarketplaceError> {
        self.repo.list(author_id, page.clamped()).await
    }
}

// ── PublishNutritionPlan ─────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct PublishNutritionPlanInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub document: Option<FileUpload>,
}

pub struct PublishNutritionPlanUseCase<R: NutritionPlanRepository, S: ObjectStorage> {
    pub repo: R,
    pub storage: S,
    pub bucket: String,
}

impl<R: NutritionPlanRepository, S: ObjectStorage> PublishNutritionPlanUseCase<R, S> {
    pub async fn execute(
        &self,
        session: &Session,
        input: PublishNutritionPlanInput,
    ) -> Result<NutritionPlan, MarketplaceError> {
        gated(
            session,
            NUTRITION_PUBLISHERS,
            "nutrition_plan",
            self.publish(session, input),
        )
        .await
    }

    async fn publish(
        &self,
        session: &Session,
        input: PublishNutritionPlanInput,
    ) -> Result<NutritionPlan, MarketplaceError> {
        let title = required_text("title", input.title.as_deref(), TITLE_MAX_CHARS)?;
        let description = required_text(
            "description",
            input.description.as_deref(),
            DESCRIPTION_MAX_CHARS,
        )?;
        let document = input
            .document
            .ok_or(ValidationError::Missing { field: "document" })?;
        AssetKind::NutritionDocument.check("document", &document)?;

        let now = Utc::now();
        let name = AssetKind::NutritionDocument.object_name(session.user_id(), now, &document);
        self.storage
            .upload(&self.bucket, &name, &document.content_type, document.bytes)
            .await?;

        let plan = NutritionPlan {
            id: Uuid::now_v7(),
            title,
            description,
            document_url: self.storage.public_url(&self.bucket, &name),
            author_id: session.user_id(),
            created_at: now,
        };
        if let Err(e) = self.repo.create(&plan).await {
            remove_orphan(&self.storage, &self.bucket, &name).await;
            return Err(e);
        }
        Ok(plan)
    }
}
