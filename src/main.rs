use std::sync::Arc;

use healthmate_relay::{config::Settings, routes, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env()?;
    if settings.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; chat requests will fail until it is");
    }

    let state = Arc::new(AppState::from_settings(&settings));
    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(settings.bind_addr).await?;

    tracing::info!(
        addr = %settings.bind_addr,
        model = %settings.model,
        "chat relay listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
