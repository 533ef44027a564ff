use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

pub use fitmarket_domain::content::ContentKind;
pub use fitmarket_domain::role::Role;

/// Label shown when a purchase points at a catalog row that no longer exists.
pub const PLAN_NOT_FOUND: &str = "Plan not found";
/// Author label used when the author row is gone.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";
/// Window counted as "recent" on the professional dashboard.
pub const RECENT_ACTIVITY_DAYS: i64 = 7;

/// Storage bucket names, one per asset family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets {
    pub avatars: String,
    pub documents: String,
    pub videos: String,
    pub anatomy: String,
}

impl Default for Buckets {
    fn default() -> Self {
        Self {
            avatars: "avatars".to_owned(),
            documents: "documents".to_owned(),
            videos: "videos".to_owned(),
            anatomy: "anatomy".to_owned(),
        }
    }
}

// ── Users ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The authenticated caller, resolved once per request and handed to every
/// use case that needs to know who is acting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
}

impl Session {
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn author(&self) -> Author {
        Author {
            id: self.user.id,
            name: self.user.name.clone(),
            role: self.user.role,
        }
    }
}

/// Author columns joined onto catalog rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
}

/// Filter for the community directory.
#[derive(Debug, Clone, Default)]
pub struct MemberFilter {
    pub role: Option<Role>,
    /// Case-insensitive substring of the member name.
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RoleCounts {
    pub total: u64,
    pub clients: u64,
    pub trainers: u64,
    pub nutritionists: u64,
}

impl RoleCounts {
    pub fn add(&mut self, role: Role, count: u64) {
        match role {
            Role::Client => self.clients += count,
            Role::Trainer => self.trainers += count,
            Role::Nutritionist => self.nutritionists += count,
        }
        self.total += count;
    }
}

// ── Catalog ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutContent {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutritionPlan {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub document_url: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub video_url: Option<String>,
    pub category: Option<String>,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A catalog row together with its author, if the author still exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authored<T> {
    pub item: T,
    pub author: Option<Author>,
}

impl<T> Authored<T> {
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .map_or(UNKNOWN_AUTHOR, |a| a.name.as_str())
    }
}

/// Where a workout video is hosted, derived from its URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoSource {
    Youtube,
    Upload,
}

impl VideoSource {
    pub fn of(url: &str) -> Self {
        if url.contains("youtube.com") || url.contains("youtu.be") {
            Self::Youtube
        } else {
            Self::Upload
        }
    }
}

// ── Advice categories ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdviceCategory {
    pub slug: &'static str,
    pub label: &'static str,
}

const fn category(slug: &'static str, label: &'static str) -> AdviceCategory {
    AdviceCategory { slug, label }
}

const COMMON_CATEGORIES: &[AdviceCategory] = &[
    category("general", "General"),
    category("motivation", "Motivation"),
    category("habits", "Healthy Habits"),
];

const TRAINER_CATEGORIES: &[AdviceCategory] = &[
    category("exercise", "Exercise"),
    category("technique", "Technique"),
    category("recovery", "Recovery"),
    category("strength", "Strength Training"),
    category("cardio", "Cardio"),
];

const NUTRITIONIST_CATEGORIES: &[AdviceCategory] = &[
    category("nutrition", "Nutrition"),
    category("diet", "Diet"),
    category("supplements", "Supplements"),
    category("hydration", "Hydration"),
    category("weight_loss", "Weight Loss"),
    category("muscle_gain", "Muscle Gain"),
];

/// Categories offered on the advice form for `role`.
pub fn advice_categories(role: Role) -> Vec<AdviceCategory> {
    let specific = match role {
        Role::Trainer => TRAINER_CATEGORIES,
        Role::Nutritionist => NUTRITIONIST_CATEGORIES,
        Role::Client => &[],
    };
    COMMON_CATEGORIES.iter().chain(specific).copied().collect()
}

/// Display label for a stored category. Uncategorised advice is "General";
/// an unknown slug is shown as-is.
pub fn category_label(slug: Option<&str>) -> String {
    let Some(slug) = slug else {
        return "General".to_owned();
    };
    COMMON_CATEGORIES
        .iter()
        .chain(TRAINER_CATEGORIES)
        .chain(NUTRITIONIST_CATEGORIES)
        .find(|c| c.slug == slug)
        .map_or_else(|| slug.to_owned(), |c| c.label.to_owned())
}

// ── Purchases ────────────────────────────────────────────────────────────────

/// Polymorphic reference from a purchase into one of the two paid catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentRef {
    Workout(Uuid),
    Nutrition(Uuid),
}

impl ContentRef {
    pub fn new(kind: ContentKind, id: Uuid) -> Self {
        match kind {
            ContentKind::Workout => Self::Workout(id),
            ContentKind::Nutrition => Self::Nutrition(id),
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Workout(_) => ContentKind::Workout,
            Self::Nutrition(_) => ContentKind::Nutrition,
        }
    }

    pub fn id(&self) -> Uuid {
        match *self {
            Self::Workout(id) | Self::Nutrition(id) => id,
        }
    }

    pub fn price_cents(&self) -> u32 {
        self.kind().price_cents()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub id: Uuid,
    pub buyer_id: Uuid,
    pub content: ContentRef,
    pub created_at: DateTime<Utc>,
}

/// Display details for a purchased item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContent {
    pub title: String,
    pub description: String,
    pub author_name: String,
}

/// A purchase joined with whatever its reference resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseDetails {
    pub purchase: Purchase,
    pub content: Option<ResolvedContent>,
}

impl PurchaseDetails {
    pub fn title(&self) -> &str {
        self.content
            .as_ref()
            .map_or(PLAN_NOT_FOUND, |c| c.title.as_str())
    }
}

/// One purchasable row in the catalog with its static price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub content: ContentRef,
    pub title: String,
    pub description: String,
    pub author_name: String,
    pub price_cents: u32,
}

// ── Dashboard ────────────────────────────────────────────────────────────────

/// A professional's own upload as listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub id: Uuid,
    pub kind: ContentKind,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<WorkoutContent> for Upload {
    fn from(w: WorkoutContent) -> Self {
        Self {
            id: w.id,
            kind: ContentKind::Workout,
            title: w.title,
            description: w.description,
            created_at: w.created_at,
        }
    }
}

impl From<NutritionPlan> for Upload {
    fn from(p: NutritionPlan) -> Self {
        Self {
            id: p.id,
            kind: ContentKind::Nutrition,
            title: p.title,
            description: p.description,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UploadStats {
    pub total_uploads: usize,
    pub recent_activity: usize,
}

impl UploadStats {
    pub fn from_uploads(uploads: &[Upload], now: DateTime<Utc>) -> Self {
        let since = now - Duration::days(RECENT_ACTIVITY_DAYS);
        Self {
            total_uploads: uploads.len(),
            recent_activity: uploads.iter().filter(|u| u.created_at >= since).count(),
        }
    }
}

// ── Anatomy gallery ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnatomyView {
    Front,
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnatomyImage {
    pub name: String,
    pub url: String,
    pub view: AnatomyView,
}

impl AnatomyImage {
    /// Classifies a stored object. Non-image objects yield `None`.
    pub fn classify(name: &str) -> Option<AnatomyView> {
        let lower = name.to_ascii_lowercase();
        let is_image = [".png", ".jpg", ".jpeg"]
            .iter()
            .any(|ext| lower.ends_with(ext));
        if !is_image {
            return None;
        }
        Some(if lower.contains("back") {
            AnatomyView::Back
        } else {
            AnatomyView::Front
        })
    }
}
