// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_view_model::DashboardViewModel;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::http_dashboard_client::HttpDashboardClient;
use crate::infrastructure::image_loader::HttpImageLoader;
use crate::presentation::app_state::{local_hour, AppState};
use crate::presentation::clipboard::MemoryClipboard;
use crate::presentation::presenter::ScreenPresenter;
use crate::presentation::routes::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;
    tracing::debug!("Loaded configuration: {:?}", config);

    // Create dashboard source (infrastructure layer)
    let source = Arc::new(HttpDashboardClient::new(
        config.api.dashboard_url(),
        config.api.token.clone(),
    ));

    // Create view model and wire the presenter as an observer
    let view_model = Arc::new(DashboardViewModel::new(source));
    let presenter = Arc::new(ScreenPresenter::new(config.chart.surface_size()));
    view_model.subscribe(presenter.clone()).await;

    // Create application state
    let state = Arc::new(AppState::new(
        view_model.clone(),
        presenter,
        Arc::new(HttpImageLoader::new()),
        Arc::new(MemoryClipboard::new()),
        local_hour,
    ));

    // Initial load, off the serving path
    tokio::spawn(async move {
        let outcome = view_model.refresh().await;
        tracing::info!("Initial dashboard load: {:?}", outcome);
    });

    // Build router (presentation layer)
    let router = create_router(state);

    // Start server
    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!("Starting link-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
