// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_dashboard_client;
pub mod image_loader;
pub mod svg_surface;
