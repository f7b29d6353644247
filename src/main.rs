use anyhow::Context;
use deepdive::{app, config, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,deepdive=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = config::settings::load();
    if settings.xai_api_key.is_none() {
        tracing::warn!("XAI_API_KEY is not set; analysis requests will fail");
    }

    let addr = settings
        .bind_address()
        .context("Invalid HOST/PORT configuration")?;

    let app = app(AppState::new(settings));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("DeepDive analysis server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
