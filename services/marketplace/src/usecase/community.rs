use crate::domain::repository::UserRepository;
use crate::domain::types::{MemberFilter, RoleCounts, User};
use crate::domain::validation::optional_text;
use crate::error::MarketplaceError;

pub struct Community {
    pub members: Vec<User>,
    /// Counts over every member, independent of the filter.
    pub stats: RoleCounts,
}

pub struct ListCommunityUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListCommunityUseCase<R> {
    pub async fn execute(&self, filter: MemberFilter) -> Result<Community, MarketplaceError> {
        let filter = MemberFilter {
            role: filter.role,
            search: optional_text(filter.search.as_deref()),
        };
        let members = self.repo.list(&filter).await?;
        let stats = self.repo.count_by_role().await?;
        Ok(Community { members, stats })
    }
}
