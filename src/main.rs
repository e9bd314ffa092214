//! is-positive binary

use anyhow::{anyhow, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use is_positive::api::create_router;
use is_positive::config::{AppConfig, LogFormat, RuntimeMode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    match config.runtime.mode {
        RuntimeMode::Lambda => {
            tracing::info!("Starting Lambda runtime");
            is_positive::lambda::run()
                .await
                .map_err(|e| anyhow!("lambda runtime failed: {}", e))?;
        }
        RuntimeMode::Http => {
            let router = create_router();

            let addr = config.bind_addr();
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind to {}", addr))?;
            tracing::info!(%addr, "Listening for HTTP traffic");

            axum::serve(listener, router).await?;
        }
    }

    Ok(())
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("is_positive=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }

    Ok(())
}
