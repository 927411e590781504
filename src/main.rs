use anyhow::Context;

use email_writer::config::ServerConfig;
use email_writer::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional .env file for local runs
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env().context("Failed to load configuration")?;
    let addr = config.socket_addr();

    eprintln!("✉️  Email Writer v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Upstream: {}", config.gemini.api_url);
    eprintln!("   API key: {}", config.gemini.masked_key());
    eprintln!("   Timeout: {}s", config.gemini.timeout.as_secs());
    eprintln!("   Generate: http://{}/api/email/generate", addr);
    eprintln!("   Health: http://{}/api/email/health\n", addr);

    routes::serve(config, shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
