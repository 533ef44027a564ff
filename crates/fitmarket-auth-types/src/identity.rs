//! Gateway-injected identity extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

/// Header carrying the identity-provider subject of the signed-in user.
pub const USER_ID_HEADER: &str = "x-fitmarket-user-id";

/// Authenticated subject forwarded by the gateway via `x-fitmarket-user-id`.
///
/// Returns 401 if the header is absent or not a UUID. The role is not
/// trusted from headers; services resolve it from their own user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityHeaders {
    pub user_id: Uuid,
}

impl<S> FromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // Header parsing is synchronous; returning a 'static future avoids
    // capturing `parts` across the await point.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<Uuid>().ok());

        async move {
            let Some(user_id) = user_id else {
                tracing::debug!("rejecting request without a valid {USER_ID_HEADER}");
                return Err(StatusCode::UNAUTHORIZED);
            };
            Ok(Self { user_id })
        }
    }
}
