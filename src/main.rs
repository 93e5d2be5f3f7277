// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::chart_composer::ChartComposer;
use crate::application::dashboard_service::DashboardService;
use crate::application::dataset_source::DatasetSource;
use crate::application::session::Session;
use crate::infrastructure::config::{load_app_config, SourceSettings};
use crate::infrastructure::file_source::FileSource;
use crate::infrastructure::http_source::HttpSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_app_config().context("Failed to load configuration")?;

    // Load the session dataset; the service does not start without it
    let source = build_source(&config.source)?;
    let session = match Session::load(source.as_ref()).await {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("{:#}", e);
            return Err(e);
        }
    };

    // Create services (application layer)
    let dashboard_service = DashboardService::new(
        session,
        ChartComposer::new(config.chart.to_style()),
        config.presentation.to_policy(),
    );

    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let app = router(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind))?;
    tracing::info!("Starting market-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}

fn build_source(settings: &SourceSettings) -> anyhow::Result<Box<dyn DatasetSource>> {
    match (&settings.url, &settings.path) {
        (Some(url), _) => Ok(Box::new(HttpSource::new(
            url.clone(),
            Duration::from_secs(settings.timeout_secs),
        ))),
        (None, Some(path)) => Ok(Box::new(FileSource::new(path))),
        (None, None) => anyhow::bail!("No dataset source configured: set source.url or source.path"),
    }
}
