// Application state for HTTP handlers
use crate::application::dashboard_view_model::DashboardViewModel;
use crate::application::image_loader::ImageLoader;
use crate::domain::link::LinkSelectionMode;
use crate::presentation::clipboard::ClipboardSink;
use crate::presentation::presenter::ScreenPresenter;
use chrono::Timelike;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Source of the local hour used for the greeting.
pub type HourClock = fn() -> u32;

pub fn local_hour() -> u32 {
    chrono::Local::now().hour()
}

pub struct AppState {
    pub view_model: Arc<DashboardViewModel>,
    pub presenter: Arc<ScreenPresenter>,
    pub image_loader: Arc<dyn ImageLoader>,
    pub clipboard: Arc<dyn ClipboardSink>,
    /// Which link list the screen is showing. Changing it never triggers a fetch.
    pub selection: RwLock<LinkSelectionMode>,
    pub clock: HourClock,
}

impl AppState {
    pub fn new(
        view_model: Arc<DashboardViewModel>,
        presenter: Arc<ScreenPresenter>,
        image_loader: Arc<dyn ImageLoader>,
        clipboard: Arc<dyn ClipboardSink>,
        clock: HourClock,
    ) -> Self {
        Self {
            view_model,
            presenter,
            image_loader,
            clipboard,
            selection: RwLock::new(LinkSelectionMode::default()),
            clock,
        }
    }

    pub async fn current_mode(&self) -> LinkSelectionMode {
        *self.selection.read().await
    }
}
