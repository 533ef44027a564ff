use crate::domain::repository::ObjectStorage;
use crate::domain::types::AnatomyImage;
use crate::error::MarketplaceError;

pub struct ListAnatomyImagesUseCase<S: ObjectStorage> {
    pub storage: S,
    pub bucket: String,
}

impl<S: ObjectStorage> ListAnatomyImagesUseCase<S> {
    /// Image objects of the anatomy bucket, sorted by name.
    pub async fn execute(&self) -> Result<Vec<AnatomyImage>, MarketplaceError> {
        let mut images: Vec<AnatomyImage> = self
            .storage
            .list(&self.bucket)
            .await?
            .into_iter()
            .filter_map(|name| {
                let view = AnatomyImage::classify(&name)?;
                Some(AnatomyImage {
                    url: self.storage.public_url(&self.bucket, &name),
                    name,
                    view,
                })
            })
            .collect();
        images.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(images)
    }
}
