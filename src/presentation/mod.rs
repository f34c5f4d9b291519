// Presentation layer - HTTP surface over the dashboard screen
pub mod app_state;
pub mod clipboard;
pub mod handlers;
pub mod presenter;
pub mod routes;
