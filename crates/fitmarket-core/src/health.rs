use std::future::Future;

use axum::extract::State;
use axum::http::StatusCode;

/// Dependency check backing `GET /readyz`.
pub trait ReadinessCheck: Send + Sync {
    fn is_ready(&self) -> impl Future<Output = bool> + Send;
}

/// Handler for `GET /healthz`. Liveness only; never touches dependencies.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz`: 503 until the service's dependencies answer.
pub async fn readyz<P>(State(check): State<P>) -> StatusCode
where
    P: ReadinessCheck + Clone,
{
    if check.is_ready().await {
        StatusCode::OK
    } else {
        tracing::warn!("readiness check failed");
        StatusCode::SERVICE_UNAVAILABLE
    }
}
