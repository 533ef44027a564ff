//! Gateway identity for tests.
//!
//! Services trust the `x-fitmarket-user-id` header the gateway injects after
//! the identity provider authenticated the caller. Tests set it directly.

use axum::http::{HeaderName, HeaderValue};
use uuid::Uuid;

use fitmarket_auth_types::identity::USER_ID_HEADER;

/// Identity injected into test requests.
#[derive(Debug, Clone, Copy)]
pub struct MockAuth {
    pub user_id: Uuid,
}

impl MockAuth {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }

    pub fn random() -> Self {
        Self::new(Uuid::new_v4())
    }

    /// Header pair for request builders.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        (
            HeaderName::from_static(USER_ID_HEADER),
            HeaderValue::from_str(&self.user_id.to_string()).unwrap(),
        )
    }
}
