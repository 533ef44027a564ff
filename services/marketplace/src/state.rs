use std::time::Duration;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use fitmarket_core::health::ReadinessCheck;

use crate::domain::types::{Buckets, Session};
use crate::error::MarketplaceError;
use crate::infra::db::{
    self, DbAdviceRepository, DbContentResolver, DbNutritionPlanRepository, DbPurchaseRepository,
    DbUserRepository, DbWorkoutRepository,
};
use crate::infra::storage::SupabaseStorage;
use crate::usecase::session::ResolveSessionUseCase;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub storage: SupabaseStorage,
    pub buckets: Buckets,
    pub payment_delay: Duration,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn workout_repo(&self) -> DbWorkoutRepository {
        DbWorkoutRepository {
            db: self.db.clone(),
        }
    }

    pub fn nutrition_repo(&self) -> DbNutritionPlanRepository {
        DbNutritionPlanRepository {
            db: self.db.clone(),
        }
    }

    pub fn advice_repo(&self) -> DbAdviceRepository {
        DbAdviceRepository {
            db: self.db.clone(),
        }
    }

    pub fn purchase_repo(&self) -> DbPurchaseRepository {
        DbPurchaseRepository {
            db: self.db.clone(),
        }
    }

    pub fn content_resolver(&self) -> DbContentResolver {
        DbContentResolver {
            db: self.db.clone(),
        }
    }

    pub fn storage(&self) -> SupabaseStorage {
        self.storage.clone()
    }

    /// Resolves the caller's profile once for the current request.
    pub async fn session(&self, user_id: Uuid) -> Result<Session, MarketplaceError> {
        ResolveSessionUseCase {
            repo: self.user_repo(),
        }
        .execute(user_id)
        .await
    }
}

impl ReadinessCheck for AppState {
    async fn is_ready(&self) -> bool {
        db::ping(&self.db).await
    }
}
