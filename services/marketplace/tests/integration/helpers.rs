use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use bytes::Bytes;
use chrono::{Duration, Utc};
use uuid::Uuid;

use fitmarket_domain::pagination::PageRequest;
use fitmarket_marketplace::domain::repository::{
    ContentResolver, NutritionPlanRepository, ObjectStorage, PurchaseRepository,
    WorkoutRepository,
};
use fitmarket_marketplace::domain::types::{
    Authored, ContentRef, NutritionPlan, Purchase, ResolvedContent, Role, Session, User,
    WorkoutContent,
};
use fitmarket_marketplace::domain::validation::FileUpload;
use fitmarket_marketplace::error::MarketplaceError;

// ── MockWorkoutRepo ──────────────────────────────────────────────────────────

pub struct MockWorkoutRepo {
    pub rows: Arc<Mutex<Vec<WorkoutContent>>>,
    pub fail_create: bool,
}

impl MockWorkoutRepo {
    pub fn new(rows: Vec<WorkoutContent>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
            fail_create: false,
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn failing() -> Self {
        Self {
            fail_create: true,
            ..Self::empty()
        }
    }

    pub fn rows_handle(&self) -> Arc<Mutex<Vec<WorkoutContent>>> {
        Arc::clone(&self.rows)
    }
}

impl WorkoutRepository for MockWorkoutRepo {
    async fn list(
        &self,
        author_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<Authored<WorkoutContent>>, MarketplaceError> {
        let mut rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|w| author_id.is_none_or(|a| w.author_id == a))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .map(|item| Authored { item, author: None })
            .collect())
    }

    async fn list_by_author(
        &self,
        author_id: Uuid,
    ) -> Result<Vec<WorkoutContent>, MarketplaceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn create(&self, workout: &WorkoutContent) -> Result<(), MarketplaceError> {
        if self.fail_create {
            return Err(anyhow!("insert workout_content: connection reset").into());
        }
        self.rows.lock().unwrap().push(workout.clone());
        Ok(())
    }
}

// ── MockNutritionRepo ────────────────────────────────────────────────────────

pub struct MockNutritionRepo {
    pub rows: Arc<Mutex<Vec<NutritionPlan>>>,
    pub fail_create: bool,
}

impl MockNutritionRepo {
    pub fn new(rows: Vec<NutritionPlan>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
            fail_create: false,
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn failing() -> Self {
        Self {
            fail_create: true,
            ..Self::empty()
        }
    }

    pub fn rows_handle(&self) -> Arc<Mutex<Vec<NutritionPlan>>> {
        Arc::clone(&self.rows)
    }
}

impl NutritionPlanRepository for MockNutritionRepo {
    async fn list(
        &self,
        author_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<Authored<NutritionPlan>>, MarketplaceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| author_id.is_none_or(|a| p.author_id == a))
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .map(|item| Authored { item, author: None })
            .collect())
    }

    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<NutritionPlan>, MarketplaceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn create(&self, plan: &NutritionPlan) -> Result<(), MarketplaceError> {
        if self.fail_create {
            return Err(anyhow!("insert nutrition_plans: connection reset").into());
        }
        self.rows.lock().unwrap().push(plan.clone());
        Ok(())
    }
}

// ── MockPurchaseRepo ─────────────────────────────────────────────────────────

pub struct MockPurchaseRepo {
    pub purchases: Arc<Mutex<Vec<Purchase>>>,
}

impl MockPurchaseRepo {
    pub fn new(purchases: Vec<Purchase>) -> Self {
        Self {
            purchases: Arc::new(Mutex::new(purchases)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn purchases_handle(&self) -> Arc<Mutex<Vec<Purchase>>> {
        Arc::clone(&self.purchases)
    }
}

impl PurchaseRepository for MockPurchaseRepo {
    async fn create(&self, purchase: &Purchase) -> Result<(), MarketplaceError> {
        self.purchases.lock().unwrap().push(purchase.clone());
        Ok(())
    }

    async fn list_by_buyer(&self, buyer_id: Uuid) -> Result<Vec<Purchase>, MarketplaceError> {
        let mut rows: Vec<_> = self
            .purchases
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.buyer_id == buyer_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}

// ── MockResolver ─────────────────────────────────────────────────────────────

/// Resolves only the references it was seeded with and counts lookups.
#[derive(Default)]
pub struct MockResolver {
    pub known: HashMap<ContentRef, ResolvedContent>,
    pub lookups: Arc<Mutex<u32>>,
}

impl MockResolver {
    pub fn with(mut self, content: ContentRef, title: &str) -> Self {
        self.known.insert(
            content,
            ResolvedContent {
                title: title.to_owned(),
                description: format!("{title} description"),
                author_name: "Coach Dana".to_owned(),
            },
        );
        self
    }
}

impl ContentResolver for MockResolver {
    async fn resolve(
        &self,
        content: &ContentRef,
    ) -> Result<Option<ResolvedContent>, MarketplaceError> {
        *self.lookups.lock().unwrap() += 1;
        Ok(self.known.get(content).cloned())
    }
}

// ── MockStorage ──────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockStorage {
    pub uploaded: Arc<Mutex<Vec<String>>>,
    pub removed: Arc<Mutex<Vec<String>>>,
    pub fail_upload: bool,
    pub fail_remove: bool,
}

impl MockStorage {
    pub fn failing_upload() -> Self {
        Self {
            fail_upload: true,
            ..Self::default()
        }
    }

    pub fn failing_remove() -> Self {
        Self {
            fail_remove: true,
            ..Self::default()
        }
    }
}

impl ObjectStorage for MockStorage {
    async fn upload(
        &self,
        bucket: &str,
        name: &str,
        _content_type: &str,
        _bytes: Bytes,
    ) -> Result<(), MarketplaceError> {
        if self.fail_upload {
            return Err(anyhow!("upload {bucket}/{name}: Bucket not found").into());
        }
        self.uploaded.lock().unwrap().push(format!("{bucket}/{name}"));
        Ok(())
    }

    fn public_url(&self, bucket: &str, name: &str) -> String {
        format!("https://store.test/{bucket}/{name}")
    }

    async fn remove(&self, bucket: &str, names: &[String]) -> Result<(), MarketplaceError> {
        // Record the attempt even when it fails.
        self.removed
            .lock()
            .unwrap()
            .extend(names.iter().map(|n| format!("{bucket}/{n}")));
        if self.fail_remove {
            return Err(anyhow!("remove from {bucket}: timed out").into());
        }
        Ok(())
    }

    async fn list(&self, _bucket: &str) -> Result<Vec<String>, MarketplaceError> {
        Ok(self.uploaded.lock().unwrap().clone())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn session(role: Role) -> Session {
    Session {
        user: User {
            id: Uuid::now_v7(),
            name: format!("Test {}", role.label()),
            role,
            avatar_url: None,
            created_at: Utc::now() - Duration::days(30),
        },
    }
}

pub fn video(len: usize) -> FileUpload {
    FileUpload {
        file_name: Some("squat.mp4".to_owned()),
        content_type: "video/mp4".to_owned(),
        bytes: Bytes::from(vec![1u8; len]),
    }
}

pub fn pdf() -> FileUpload {
    FileUpload {
        file_name: Some("plan.pdf".to_owned()),
        content_type: "application/pdf".to_owned(),
        bytes: Bytes::from_static(b"%PDF-1.7"),
    }
}

pub fn workout(author_id: Uuid, title: &str, age_days: i64) -> WorkoutContent {
    WorkoutContent {
        id: Uuid::now_v7(),
        title: title.to_owned(),
        description: format!("{title} description"),
        video_url: "https://youtu.be/abc123".to_owned(),
        author_id,
        created_at: Utc::now() - Duration::days(age_days),
    }
}

pub fn nutrition_plan(author_id: Uuid, title: &str, age_days: i64) -> NutritionPlan {
    NutritionPlan {
        id: Uuid::now_v7(),
        title: title.to_owned(),
        description: format!("{title} description"),
        document_url: "https://store.test/documents/plan.pdf".to_owned(),
        author_id,
        created_at: Utc::now() - Duration::days(age_days),
    }
}

pub fn purchase(buyer_id: Uuid, content: ContentRef, age_days: i64) -> Purchase {
    Purchase {
        id: Uuid::now_v7(),
        buyer_id,
        content,
        created_at: Utc::now() - Duration::days(age_days),
    }
}
