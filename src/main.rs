use anyhow::{Context, Result};
use eazy_waitlist::config::Config;
use eazy_waitlist::i18n::TranslationValidator;
use eazy_waitlist::waitlist;
use eazy_waitlist::web::{self, AppState};
use std::net::SocketAddr;
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("eazy_waitlist=info".parse()?),
        )
        .init();

    info!("Starting EazyEnglish waitlist server");

    let config = Config::from_env()?;

    for (lang, report) in TranslationValidator::validate_registry() {
        if report.is_clean() {
            debug!("{} translations OK", lang.name());
            continue;
        }
        for error in &report.errors {
            warn!("Translation problem in {}: {}", lang.name(), error);
        }
        for warning in &report.warnings {
            warn!("Translation warning in {}: {}", lang.name(), warning);
        }
    }

    let store = waitlist::open_store(&config).await?;
    if config.admin_password.is_none() {
        warn!("ADMIN_PASSWORD not set, admin endpoints will reject every request");
    }

    let state = AppState::new(store, config.admin_password.clone());
    info!("Service ready: {}", state.is_ready());

    let app = web::build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
