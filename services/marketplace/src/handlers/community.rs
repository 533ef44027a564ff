use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use fitmarket_auth_types::identity::IdentityHeaders;

use crate::domain::types::{MemberFilter, Role, RoleCounts};
use crate::error::MarketplaceError;
use crate::handlers::user::ProfileResponse;
use crate::state::AppState;
use crate::usecase::community::ListCommunityUseCase;

// ── GET /community ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CommunityQuery {
    pub role: Option<Role>,
    pub search: Option<String>,
}

#[derive(Serialize)]
pub struct CommunityResponse {
    pub members: Vec<ProfileResponse>,
    pub stats: RoleCounts,
}

pub async fn get_community(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(query): Query<CommunityQuery>,
) -> Result<Json<CommunityResponse>, MarketplaceError> {
    state.session(identity.user_id).await?;
    let usecase = ListCommunityUseCase {
        repo: state.user_repo(),
    };
    let community = usecase
        .execute(MemberFilter {
            role: query.role,
            search: query.search,
        })
        .await?;
    Ok(Json(CommunityResponse {
        members: community.members.into_iter().map(Into::into).collect(),
        stats: community.stats,
    }))
}
