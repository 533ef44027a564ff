use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::validation::ValidationError;

/// Marketplace service error variants.
#[derive(Debug, thiserror::Error)]
pub enum MarketplaceError {
    #[error("profile not found")]
    ProfileNotFound,
    #[error("Restricted Access")]
    RestrictedAccess,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("invalid form data: {0}")]
    InvalidForm(String),
    #[error("content not found")]
    ContentNotFound,
    #[error("user already exists")]
    UserAlreadyExists,
    /// Database or object-storage failure; the message carries the store's text.
    #[error("{0:#}")]
    Store(#[from] anyhow::Error),
}

impl MarketplaceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::RestrictedAccess => "RESTRICTED_ACCESS",
            Self::Validation(_) => "VALIDATION",
            Self::InvalidForm(_) => "INVALID_FORM",
            Self::ContentNotFound => "CONTENT_NOT_FOUND",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::Store(_) => "STORE_ERROR",
        }
    }
}

impl IntoResponse for MarketplaceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::ProfileNotFound | Self::ContentNotFound => StatusCode::NOT_FOUND,
            Self::RestrictedAccess => StatusCode::FORBIDDEN,
            Self::Validation(_) | Self::InvalidForm(_) => StatusCode::BAD_REQUEST,
            Self::UserAlreadyExists => StatusCode::CONFLICT,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Store(ref e) = self {
            tracing::error!(error = %format!("{e:#}"), kind = "STORE_ERROR", "store error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
