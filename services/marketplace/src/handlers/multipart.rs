use std::collections::HashMap;

use axum_extra::extract::Multipart;

use crate::domain::validation::FileUpload;
use crate::error::MarketplaceError;

/// Text and file parts of a `multipart/form-data` body, keyed by field name.
#[derive(Debug, Default)]
pub struct FormFields {
    texts: HashMap<String, String>,
    files: HashMap<String, FileUpload>,
}

impl FormFields {
    pub async fn read(mut multipart: Multipart) -> Result<Self, MarketplaceError> {
        let mut fields = Self::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| MarketplaceError::InvalidForm(e.to_string()))?
        {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            match field.file_name().map(str::to_owned) {
                Some(file_name) => {
                    let content_type = field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_owned();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| MarketplaceError::InvalidForm(e.to_string()))?;
                    // Browsers send an empty, unnamed part for an untouched file input.
                    if bytes.is_empty() && file_name.is_empty() {
                        continue;
                    }
                    fields.files.insert(
                        name,
                        FileUpload {
                            file_name: Some(file_name),
                            content_type,
                            bytes,
                        },
                    );
                }
                None => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| MarketplaceError::InvalidForm(e.to_string()))?;
                    fields.texts.insert(name, text);
                }
            }
        }
        Ok(fields)
    }

    pub fn text(&mut self, name: &str) -> Option<String> {
        self.texts.remove(name)
    }

    pub fn file(&mut self, name: &str) -> Option<FileUpload> {
        self.files.remove(name)
    }
}
