use std::env;

use rental_engine::api::{AppState, create_router};
use rental_engine::config::ConfigLoader;
use rental_engine::pricing::RuleRegistry;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let registry = match env::var("RENTAL_ENGINE_CONFIG") {
        Ok(path) => ConfigLoader::load(path)?,
        Err(_) => {
            info!("RENTAL_ENGINE_CONFIG not set, using standard pricing rules");
            RuleRegistry::standard()
        }
    };

    let addr = env::var("RENTAL_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, rules = registry.len(), "Rental engine listening");

    axum::serve(listener, create_router(AppState::new(registry))).await?;
    Ok(())
}
