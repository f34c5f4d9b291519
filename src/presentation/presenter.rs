// Screen presenter - observer that turns published dashboard state into renderable output
use crate::application::observer::DashboardObserver;
use crate::domain::chart::{ChartDataset, ChartGeometry, SurfaceSize};
use crate::domain::snapshot::DashboardSnapshot;
use crate::infrastructure::svg_surface::SvgSurface;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

pub struct ScreenPresenter {
    surface_size: SurfaceSize,
    chart_svg: RwLock<Option<String>>,
    stat_list_reloads: AtomicU64,
    link_list_reloads: AtomicU64,
}

impl ScreenPresenter {
    pub fn new(surface_size: SurfaceSize) -> Self {
        Self {
            surface_size,
            chart_svg: RwLock::new(None),
            stat_list_reloads: AtomicU64::new(0),
            link_list_reloads: AtomicU64::new(0),
        }
    }

    pub fn reload_stat_list(&self) {
        self.stat_list_reloads.fetch_add(1, Ordering::SeqCst);
    }

    pub fn reload_link_list(&self) {
        self.link_list_reloads.fetch_add(1, Ordering::SeqCst);
    }

    pub fn stat_list_reloads(&self) -> u64 {
        self.stat_list_reloads.load(Ordering::SeqCst)
    }

    pub fn link_list_reloads(&self) -> u64 {
        self.link_list_reloads.load(Ordering::SeqCst)
    }

    /// Draw the dataset onto a fresh surface, replacing any previous render.
    pub fn render_chart(&self, dataset: &ChartDataset) {
        if dataset.is_empty() {
            tracing::debug!("Chart dataset is empty, rendering axes only");
        }
        let geometry = ChartGeometry::compute(dataset, self.surface_size);
        let mut surface = SvgSurface::new(self.surface_size);
        geometry.draw(&mut surface);

        *self
            .chart_svg
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(surface.finish());
    }

    pub fn chart_svg(&self) -> Option<String> {
        self.chart_svg
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl DashboardObserver for ScreenPresenter {
    fn on_data_updated(&self, snapshot: Arc<DashboardSnapshot>) {
        tracing::debug!(
            "Reloading lists: {} top links, {} recent links",
            snapshot.data.top_links.as_ref().map(|l| l.len()).unwrap_or(0),
            snapshot.data.recent_links.as_ref().map(|l| l.len()).unwrap_or(0)
        );
        self.reload_stat_list();
        self.reload_link_list();
    }

    fn on_chart_ready(&self, dataset: &ChartDataset) {
        self.render_chart(dataset);
    }
}
