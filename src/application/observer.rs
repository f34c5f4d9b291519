// Observer interface for dashboard updates
use crate::domain::chart::ChartDataset;
use crate::domain::snapshot::DashboardSnapshot;
use std::sync::Arc;

/// Receives published dashboard state after a successful refresh.
///
/// `on_data_updated` is always called before `on_chart_ready` for the same snapshot.
pub trait DashboardObserver: Send + Sync {
    fn on_data_updated(&self, snapshot: Arc<DashboardSnapshot>);

    fn on_chart_ready(&self, dataset: &ChartDataset);
}
