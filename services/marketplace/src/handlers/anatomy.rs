use axum::{Json, extract::State};
use serde::Serialize;

use fitmarket_auth_types::identity::IdentityHeaders;

use crate::domain::types::{AnatomyImage, AnatomyView};
use crate::error::MarketplaceError;
use crate::state::AppState;
use crate::usecase::anatomy::ListAnatomyImagesUseCase;

#[derive(Serialize)]
pub struct AnatomyImageResponse {
    pub name: String,
    pub url: String,
}

#[derive(Serialize, Default)]
pub struct AnatomyGalleryResponse {
    pub front: Vec<AnatomyImageResponse>,
    pub back: Vec<AnatomyImageResponse>,
}

// ── GET /anatomy/images ──────────────────────────────────────────────────────

pub async fn get_anatomy_images(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<AnatomyGalleryResponse>, MarketplaceError> {
    let usecase = ListAnatomyImagesUseCase {
        storage: state.storage(),
        bucket: state.buckets.anatomy.clone(),
    };
    let mut gallery = AnatomyGalleryResponse::default();
    for AnatomyImage { name, url, view } in usecase.execute().await? {
        let image = AnatomyImageResponse { name, url };
        match view {
            AnatomyView::Front => gallery.front.push(image),
            AnatomyView::Back => gallery.back.push(image),
        }
    }
    Ok(Json(gallery))
}
