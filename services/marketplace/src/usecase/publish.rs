//! Shared steps of the role-gated publishing workflow.

use std::future::Future;

use crate::domain::form::FormState;
use crate::domain::repository::ObjectStorage;
use crate::domain::types::{Role, Session};
use crate::error::MarketplaceError;

/// Runs `publish` through the form lifecycle for `session`.
///
/// `publish` is not polled when the role is denied, so nothing it would
/// validate, upload or insert happens.
pub async fn gated<T, F>(
    session: &Session,
    required: &[Role],
    form: &'static str,
    publish: F,
) -> Result<T, MarketplaceError>
where
    F: Future<Output = Result<T, MarketplaceError>>,
{
    let state = FormState::<()>::new().role_resolved(session.role(), required);
    if state.is_denied() {
        tracing::debug!(form, role = %session.role(), "form denied");
        return Err(MarketplaceError::RestrictedAccess);
    }
    let state = state.submit();
    match publish.await {
        Ok(value) => {
            let state = state.succeeded();
            tracing::info!(form, user_id = %session.user_id(), state = state.name(), "published");
            Ok(value)
        }
        Err(e) => {
            let state = state.failed(e.to_string());
            tracing::debug!(form, state = state.name(), error = %e, "publish failed");
            Err(e)
        }
    }
}

/// Best-effort removal of an object whose catalog write failed. Tried once;
/// a failure leaves an orphan that is logged for offline cleanup.
pub async fn remove_orphan<S: ObjectStorage>(storage: &S, bucket: &str, name: &str) {
    match storage.remove(bucket, &[name.to_owned()]).await {
        Ok(()) => tracing::info!(bucket, object = name, "removed uploaded object"),
        Err(e) => tracing::warn!(
            bucket,
            object = name,
            error = %e,
            "orphaned object left in storage"
        ),
    }
}
