use std::time::Duration;

use serde::Deserialize;

use fitmarket_core::config::Config;

use crate::domain::types::Buckets;

/// Marketplace service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct MarketplaceConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server. Env var: `MARKETPLACE_PORT`.
    #[serde(default = "default_port")]
    pub marketplace_port: u16,
    /// Project URL, e.g. `https://abc.supabase.co`.
    pub supabase_url: String,
    pub supabase_service_role_key: String,
    #[serde(default = "default_avatars_bucket")]
    pub avatars_bucket: String,
    #[serde(default = "default_documents_bucket")]
    pub documents_bucket: String,
    #[serde(default = "default_videos_bucket")]
    pub videos_bucket: String,
    #[serde(default = "default_anatomy_bucket")]
    pub anatomy_bucket: String,
    /// Simulated payment processing time. Env var: `PAYMENT_DELAY_MS`.
    #[serde(default = "default_payment_delay_ms")]
    pub payment_delay_ms: u64,
}

impl Config for MarketplaceConfig {}

fn default_port() -> u16 {
    3120
}

fn default_avatars_bucket() -> String {
    Buckets::default().avatars
}

fn default_documents_bucket() -> String {
    Buckets::default().documents
}

fn default_videos_bucket() -> String {
    Buckets::default().videos
}

fn default_anatomy_bucket() -> String {
    Buckets::default().anatomy
}

fn default_payment_delay_ms() -> u64 {
    2000
}

impl MarketplaceConfig {
    pub fn buckets(&self) -> Buckets {
        Buckets {
            avatars: self.avatars_bucket.clone(),
            documents: self.documents_bucket.clone(),
            videos: self.videos_bucket.clone(),
            anatomy: self.anatomy_bucket.clone(),
        }
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }
}
