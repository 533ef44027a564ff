use chrono::{DateTime, Utc};
use futures::future::join_all;

use crate::domain::repository::{
    ContentResolver, NutritionPlanRepository, PurchaseRepository, WorkoutRepository,
};
use crate::domain::types::{PurchaseDetails, Role, Session, Upload, UploadStats};
use crate::error::MarketplaceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dashboard {
    Client {
        purchases: Vec<PurchaseDetails>,
        total_purchases: usize,
    },
    Professional {
        uploads: Vec<Upload>,
        stats: UploadStats,
    },
}

pub struct DashboardUseCase<P, C, W, N>
where
    P: PurchaseRepository,
    C: ContentResolver,
    W: WorkoutRepository,
    N: NutritionPlanRepository,
{
    pub purchases: P,
    pub resolver: C,
    pub workouts: W,
    pub nutrition: N,
}

impl<P, C, W, N> DashboardUseCase<P, C, W, N>
where
    P: PurchaseRepository,
    C: ContentResolver,
    W: WorkoutRepository,
    N: NutritionPlanRepository,
{
    pub async fn execute(
        &self,
        session: &Session,
        now: DateTime<Utc>,
    ) -> Result<Dashboard, MarketplaceError> {
        match session.role() {
            Role::Client => self.client(session).await,
            Role::Trainer => {
                let uploads = self
                    .workouts
                    .list_by_author(session.user_id())
                    .await?
                    .into_iter()
                    .map(Upload::from)
                    .collect();
                Ok(professional(uploads, now))
            }
            Role::Nutritionist => {
                let uploads = self
                    .nutrition
                    .list_by_author(session.user_id())
                    .await?
                    .into_iter()
                    .map(Upload::from)
                    .collect();
                Ok(professional(uploads, now))
            }
        }
    }

    /// Resolves every purchase concurrently, then restores newest-first order.
    async fn client(&self, session: &Session) -> Result<Dashboard, MarketplaceError> {
        let purchases = self.purchases.list_by_buyer(session.user_id()).await?;
        let resolved = join_all(purchases.into_iter().map(|purchase| async move {
            let content = self.resolver.resolve(&purchase.content).await?;
            Ok::<_, MarketplaceError>(PurchaseDetails { purchase, content })
        }))
        .await;

        let mut purchases = resolved.into_iter().collect::<Result<Vec<_>, _>>()?;
        purchases.sort_by(|a, b| b.purchase.created_at.cmp(&a.purchase.created_at));
        Ok(Dashboard::Client {
            total_purchases: purchases.len(),
            purchases,
        })
    }
}

fn professional(mut uploads: Vec<Upload>, now: DateTime<Utc>) -> Dashboard {
    uploads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Dashboard::Professional {
        stats: UploadStats::from_uploads(&uploads, now),
        uploads,
    }
}
