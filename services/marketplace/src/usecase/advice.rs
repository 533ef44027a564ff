use chrono::Utc;
use uuid::Uuid;

use fitmarket_domain::pagination::PageRequest;

use crate::domain::form::ADVICE_PUBLISHERS;
use crate::domain::repository::AdviceRepository;
use crate::domain::types::{Advice, Authored, Session};
use crate::domain::validation::{
    ADVICE_BODY_MAX_CHARS, TITLE_MAX_CHARS, optional_text, required_text, youtube_url,
};
use crate::error::MarketplaceError;
use crate::usecase::publish::gated;

// ── ListAdvice ───────────────────────────────────────────────────────────────

pub struct ListAdviceUseCase<R: AdviceRepository> {
    pub repo: R,
}

impl<R: AdviceRepository> ListAdviceUseCase<R> {
    pub async fn execute(
        &self,
        author_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<Authored<Advice>>, MarketplaceError> {
        self.repo.list(author_id, page.clamped()).await
    }
}

// ── PublishAdvice ────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct PublishAdviceInput {
    pub title: Option<String>,
    pub body: Option<String>,
    pub video_url: Option<String>,
    /// Free-form slug; unknown values are stored and shown verbatim.
    pub category: Option<String>,
}

pub struct PublishAdviceUseCase<R: AdviceRepository> {
    pub repo: R,
}

impl<R: AdviceRepository> PublishAdviceUseCase<R> {
    pub async fn execute(
        &self,
        session: &Session,
        input: PublishAdviceInput,
    ) -> Result<Advice, MarketplaceError> {
        gated(
            session,
            ADVICE_PUBLISHERS,
            "advice",
            self.publish(session, input),
        )
        .await
    }

    async fn publish(
        &self,
        session: &Session,
        input: PublishAdviceInput,
    ) -> Result<Advice, MarketplaceError> {
        let title = required_text("title", input.title.as_deref(), TITLE_MAX_CHARS)?;
        let body = required_text("body", input.body.as_deref(), ADVICE_BODY_MAX_CHARS)?;
        let video_url = optional_text(input.video_url.as_deref())
            .map(|url| youtube_url("video_url", &url))
            .transpose()?;

        let advice = Advice {
            id: Uuid::now_v7(),
            title,
            body,
            video_url,
            category: optional_text(input.category.as_deref()),
            author_id: session.user_id(),
            created_at: Utc::now(),
        };
        self.repo.create(&advice).await?;
        Ok(advice)
    }
}
