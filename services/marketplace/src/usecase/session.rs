use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::domain::types::Session;
use crate::error::MarketplaceError;

pub struct ResolveSessionUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ResolveSessionUseCase<R> {
    /// Looks up the caller's profile. A signed-in subject without a profile
    /// row gets `ProfileNotFound`.
    pub async fn execute(&self, user_id: Uuid) -> Result<Session, MarketplaceError> {
        let user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(MarketplaceError::ProfileNotFound)?;
        Ok(Session { user })
    }
}
