use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use fitmarket_domain::pagination::PageRequest;

use crate::domain::form::{PURCHASERS, RoleGate};
use crate::domain::repository::{
    ContentResolver, NutritionPlanRepository, PurchaseRepository, WorkoutRepository,
};
use crate::domain::types::{
    CatalogEntry, ContentKind, ContentRef, Purchase, PurchaseDetails, Session,
};
use crate::error::MarketplaceError;

fn require_purchaser(session: &Session) -> Result<(), MarketplaceError> {
    if RoleGate::allows(session.role(), PURCHASERS) {
        Ok(())
    } else {
        Err(MarketplaceError::RestrictedAccess)
    }
}

// ── ListCatalog ──────────────────────────────────────────────────────────────

pub struct ListCatalogUseCase<W: WorkoutRepository, N: NutritionPlanRepository> {
    pub workouts: W,
    pub nutrition: N,
}

impl<W: WorkoutRepository, N: NutritionPlanRepository> ListCatalogUseCase<W, N> {
    /// Purchasable items of one kind with their static price.
    pub async fn execute(
        &self,
        session: &Session,
        kind: ContentKind,
        page: PageRequest,
    ) -> Result<Vec<CatalogEntry>, MarketplaceError> {
        require_purchaser(session)?;
        let page = page.clamped();
        let entries = match kind {
            ContentKind::Workout => self
                .workouts
                .list(None, page)
                .await?
                .into_iter()
                .map(|w| CatalogEntry {
                    content: ContentRef::Workout(w.item.id),
                    author_name: w.author_name().to_owned(),
                    title: w.item.title,
                    description: w.item.description,
                    price_cents: kind.price_cents(),
                })
                .collect(),
            ContentKind::Nutrition => self
                .nutrition
                .list(None, page)
                .await?
                .into_iter()
                .map(|p| CatalogEntry {
                    content: ContentRef::Nutrition(p.item.id),
                    author_name: p.author_name().to_owned(),
                    title: p.item.title,
                    description: p.item.description,
                    price_cents: kind.price_cents(),
                })
                .collect(),
        };
        Ok(entries)
    }
}

// ── CreatePurchase ───────────────────────────────────────────────────────────

pub struct CreatePurchaseUseCase<P: PurchaseRepository, C: ContentResolver> {
    pub purchases: P,
    pub resolver: C,
    /// Simulated payment processing time before the purchase is recorded.
    pub payment_delay: Duration,
}

impl<P: PurchaseRepository, C: ContentResolver> CreatePurchaseUseCase<P, C> {
    /// Records a purchase of `content`. No payment is taken and repeat
    /// purchases of the same item are accepted.
    pub async fn execute(
        &self,
        session: &Session,
        content: ContentRef,
    ) -> Result<Purchase, MarketplaceError> {
        require_purchaser(session)?;
        if self.resolver.resolve(&content).await?.is_none() {
            return Err(MarketplaceError::ContentNotFound);
        }

        tracing::debug!(
            buyer_id = %session.user_id(),
            content_type = %content.kind(),
            price_cents = content.price_cents(),
            "processing simulated payment"
        );
        tokio::time::sleep(self.payment_delay).await;

        let purchase = Purchase {
            id: Uuid::now_v7(),
            buyer_id: session.user_id(),
            content,
            created_at: Utc::now(),
        };
        self.purchases.create(&purchase).await?;
        tracing::info!(
            purchase_id = %purchase.id,
            content_type = %content.kind(),
            content_id = %content.id(),
            "purchase recorded"
        );
        Ok(purchase)
    }
}

// ── ListPurchases ────────────────────────────────────────────────────────────

pub struct ListPurchasesUseCase<P: PurchaseRepository, C: ContentResolver> {
    pub purchases: P,
    pub resolver: C,
}

impl<P: PurchaseRepository, C: ContentResolver> ListPurchasesUseCase<P, C> {
    /// The caller's purchases, newest first. Each reference is resolved with
    /// its own lookup, one after another.
    pub async fn execute(
        &self,
        session: &Session,
    ) -> Result<Vec<PurchaseDetails>, MarketplaceError> {
        let purchases = self.purchases.list_by_buyer(session.user_id()).await?;
        let mut details = Vec::with_capacity(purchases.len());
        for purchase in purchases {
            let content = self.resolver.resolve(&purchase.content).await?;
            details.push(PurchaseDetails { purchase, content });
        }
        Ok(details)
    }
}
