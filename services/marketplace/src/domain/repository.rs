#![allow(async_fn_in_trait)]

use bytes::Bytes;
use uuid::Uuid;

use fitmarket_domain::pagination::PageRequest;

use crate::domain::types::{
    Advice, Authored, ContentRef, MemberFilter, NutritionPlan, Purchase, ResolvedContent,
    RoleCounts, User, WorkoutContent,
};
use crate::error::MarketplaceError;

/// Repository for marketplace profiles.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, MarketplaceError>;
    async fn create(&self, user: &User) -> Result<(), MarketplaceError>;
    async fn update_avatar(
        &self,
        id: Uuid,
        avatar_url: Option<&str>,
    ) -> Result<(), MarketplaceError>;
    /// Members matching `filter`, newest first.
    async fn list(&self, filter: &MemberFilter) -> Result<Vec<User>, MarketplaceError>;
    async fn count_by_role(&self) -> Result<RoleCounts, MarketplaceError>;
}

pub trait WorkoutRepository: Send + Sync {
    /// Newest first, joined with the author.
    async fn list(
        &self,
        author_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<Authored<WorkoutContent>>, MarketplaceError>;
    /// Every workout by `author_id`, newest first.
    async fn list_by_author(&self, author_id: Uuid)
    -> Result<Vec<WorkoutContent>, MarketplaceError>;
    async fn create(&self, workout: &WorkoutContent) -> Result<(), MarketplaceError>;
}

pub trait NutritionPlanRepository: Send + Sync {
    async fn list(
        &self,
        author_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<Authored<NutritionPlan>>, MarketplaceError>;
    async fn list_by_author(&self, author_id: Uuid)
    -> Result<Vec<NutritionPlan>, MarketplaceError>;
    async fn create(&self, plan: &NutritionPlan) -> Result<(), MarketplaceError>;
}

pub trait AdviceRepository: Send + Sync {
    async fn list(
        &self,
        author_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<Authored<Advice>>, MarketplaceError>;
    async fn create(&self, advice: &Advice) -> Result<(), MarketplaceError>;
}

pub trait PurchaseRepository: Send + Sync {
    async fn create(&self, purchase: &Purchase) -> Result<(), MarketplaceError>;
    /// Purchases made by `buyer_id`, newest first.
    async fn list_by_buyer(&self, buyer_id: Uuid) -> Result<Vec<Purchase>, MarketplaceError>;
}

/// Single place where a [`ContentRef`] is turned into display details.
///
/// Each call is one single-row lookup in the table the variant selects.
/// `Ok(None)` means the row is gone; that is not an error.
pub trait ContentResolver: Send + Sync {
    async fn resolve(
        &self,
        content: &ContentRef,
    ) -> Result<Option<ResolvedContent>, MarketplaceError>;
}

/// Object storage bucket operations.
pub trait ObjectStorage: Send + Sync {
    async fn upload(
        &self,
        bucket: &str,
        name: &str,
        content_type: &str,
        bytes: Bytes,
    ) -> Result<(), MarketplaceError>;
    fn public_url(&self, bucket: &str, name: &str) -> String;
    async fn remove(&self, bucket: &str, names: &[String]) -> Result<(), MarketplaceError>;
    /// Object names at the root of `bucket`.
    async fn list(&self, bucket: &str) -> Result<Vec<String>, MarketplaceError>;
}
