use anyhow::{Context as _, anyhow};
use bytes::Bytes;
use reqwest::{Client, Response};
use serde::Deserialize;

use crate::domain::repository::ObjectStorage;
use crate::error::MarketplaceError;

/// Supabase Storage REST client authenticated with the service-role key.
#[derive(Clone)]
pub struct SupabaseStorage {
    pub url: String,
    pub service_role_key: String,
    pub http: Client,
}

#[derive(Deserialize)]
struct ListedObject {
    name: String,
}

impl SupabaseStorage {
    pub fn new(url: &str, service_role_key: String) -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent("fitmarket-marketplace")
            .build()
            .context("build storage HTTP client")?;
        Ok(Self {
            url: url.trim_end_matches('/').to_owned(),
            service_role_key,
            http,
        })
    }

    fn object_endpoint(&self, path: &str) -> String {
        format!("{}/storage/v1/object/{path}", self.url)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .bearer_auth(&self.service_role_key)
            .header("apikey", &self.service_role_key)
    }
}

/// Turns a non-2xx storage reply into an error carrying the body text.
async fn ensure_success(response: Response) -> anyhow::Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(anyhow!("storage responded {status}: {body}"))
}

impl ObjectStorage for SupabaseStorage {
    async fn upload(
        &self,
        bucket: &str,
        name: &str,
        content_type: &str,
        bytes: Bytes,
    ) -> Result<(), MarketplaceError> {
        let request = self
            .http
            .post(self.object_endpoint(&format!("{bucket}/{name}")))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(bytes);
        let response = self
            .authorized(request)
            .send()
            .await
            .with_context(|| format!("upload {bucket}/{name}"))?;
        ensure_success(response)
            .await
            .with_context(|| format!("upload {bucket}/{name}"))?;
        tracing::debug!(bucket, object = name, "object uploaded");
        Ok(())
    }

    fn public_url(&self, bucket: &str, name: &str) -> String {
        self.object_endpoint(&format!("public/{bucket}/{name}"))
    }

    async fn remove(&self, bucket: &str, names: &[String]) -> Result<(), MarketplaceError> {
        let request = self
            .http
            .delete(self.object_endpoint(bucket))
            .json(&serde_json::json!({ "prefixes": names }));
        let response = self
            .authorized(request)
            .send()
            .await
            .with_context(|| format!("remove from {bucket}"))?;
        ensure_success(response)
            .await
            .with_context(|| format!("remove from {bucket}"))?;
        Ok(())
    }

    async fn list(&self, bucket: &str) -> Result<Vec<String>, MarketplaceError> {
        let request = self
            .http
            .post(self.object_endpoint(&format!("list/{bucket}")))
            .json(&serde_json::json!({
                "prefix": "",
                "limit": 1000,
                "offset": 0,
                "sortBy": { "column": "name", "order": "asc" },
            }));
        let response = self
            .authorized(request)
            .send()
            .await
            .with_context(|| format!("list {bucket}"))?;
        let objects: Vec<ListedObject> = ensure_success(response)
            .await
            .with_context(|| format!("list {bucket}"))?
            .json()
            .await
            .with_context(|| format!("decode listing of {bucket}"))?;
        Ok(objects.into_iter().map(|o| o.name).collect())
    }
}
