use activities::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
use activities::modules::registrations::adapters::outbound::registration_store_in_memory::InMemoryRegistrationStore;
use activities::shared::core::clock::SystemClock;
use activities::shared::infrastructure::blob_store::in_memory::InMemoryBlobStore;
use activities::shell::config::AppConfig;
use activities::shell::http::router;
use activities::shell::state::AppState;
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("activities=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env().context("reading configuration")?;

    let state = AppState::new(
        Arc::new(InMemoryActivityStore::new()),
        Arc::new(InMemoryBlobStore::new(&config.blob_base_url)),
        Arc::new(InMemoryRegistrationStore::new()),
        Arc::new(SystemClock),
        config.page_size,
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, page_size = config.page_size, "activities service listening");

    axum::serve(listener, router(state))
        .await
        .context("serving http")?;
    Ok(())
}
