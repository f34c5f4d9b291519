// Application layer - Fetch flow, observers and collaborator seams
pub mod dashboard_source;
pub mod dashboard_view_model;
pub mod image_loader;
pub mod observer;
