use log::{error, info};
use std::sync::Arc;

use recipe_extractor::config::AppConfig;
use recipe_extractor::{server, RecipeExtractor};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load()?;

    // Refuse to start without a usable completion API configuration
    let extractor = match RecipeExtractor::from_config(&config.azure_openai) {
        Ok(extractor) => Arc::new(extractor),
        Err(e) => {
            error!("{}", e);
            return Err(e.into());
        }
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, server::router(extractor))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
