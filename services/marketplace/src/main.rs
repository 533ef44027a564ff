use sea_orm::Database;
use tracing::info;

use fitmarket_core::config::Config;
use fitmarket_core::tracing::init_tracing;

use fitmarket_marketplace::config::MarketplaceConfig;
use fitmarket_marketplace::infra::storage::SupabaseStorage;
use fitmarket_marketplace::router::build_router;
use fitmarket_marketplace::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = MarketplaceConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let storage = SupabaseStorage::new(
        &config.supabase_url,
        config.supabase_service_role_key.clone(),
    )
    .expect("failed to build storage client");

    let state = AppState {
        db,
        storage,
        buckets: config.buckets(),
        payment_delay: config.payment_delay(),
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.marketplace_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("marketplace service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
