// Dashboard view model - Owns the held snapshot and publishes refreshes to observers
use crate::application::dashboard_source::DashboardSource;
use crate::application::observer::DashboardObserver;
use crate::domain::chart::ChartDataset;
use crate::domain::link::LinkSelectionMode;
use crate::domain::snapshot::{DashboardSnapshot, LinkSummary};
use crate::domain::stat_item::StatItem;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Snapshot replaced and observers notified.
    Updated,
    /// Fetch failed; previous state kept.
    Failed,
    /// A newer refresh was issued while this one was in flight; response dropped.
    Superseded,
}

#[derive(Default)]
struct ViewState {
    snapshot: Option<Arc<DashboardSnapshot>>,
    stat_items: Vec<StatItem>,
}

pub struct DashboardViewModel {
    source: Arc<dyn DashboardSource>,
    state: RwLock<ViewState>,
    observers: RwLock<Vec<Arc<dyn DashboardObserver>>>,
    latest_ticket: AtomicU64,
    /// Held from the ticket check until every observer has been notified.
    publish: Mutex<()>,
}

impl DashboardViewModel {
    pub fn new(source: Arc<dyn DashboardSource>) -> Self {
        Self {
            source,
            state: RwLock::new(ViewState::default()),
            observers: RwLock::new(Vec::new()),
            latest_ticket: AtomicU64::new(0),
            publish: Mutex::new(()),
        }
    }

    pub async fn subscribe(&self, observer: Arc<dyn DashboardObserver>) {
        self.observers.write().await.push(observer);
    }

    /// Fetch a fresh snapshot and publish it.
    ///
    /// Only the most recently issued refresh may commit; an older response that
    /// lands after a newer request was issued is discarded. Commits are published
    /// one at a time, so observers see snapshots in commit order.
    pub async fn refresh(&self) -> RefreshOutcome {
        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("Dashboard refresh {} started", ticket);

        let snapshot = match self.source.fetch_dashboard().await {
            Ok(snapshot) => Arc::new(snapshot),
            Err(e) => {
                tracing::warn!("Dashboard refresh {} failed, keeping previous data: {}", ticket, e);
                return RefreshOutcome::Failed;
            }
        };

        let _publish = self.publish.lock().await;
        {
            let mut state = self.state.write().await;
            if self.latest_ticket.load(Ordering::SeqCst) != ticket {
                tracing::debug!("Dashboard refresh {} superseded, dropping response", ticket);
                return RefreshOutcome::Superseded;
            }
            state.stat_items = StatItem::from_snapshot(&snapshot);
            state.snapshot = Some(snapshot.clone());
        }

        let dataset = snapshot.chart_dataset();
        let observers = self.observers.read().await.clone();

        tracing::info!(
            "Dashboard refresh {} committed: {} chart points, notifying {} observers",
            ticket,
            dataset.len(),
            observers.len()
        );

        for observer in &observers {
            observer.on_data_updated(snapshot.clone());
        }
        for observer in &observers {
            observer.on_chart_ready(&dataset);
        }

        RefreshOutcome::Updated
    }

    pub async fn snapshot(&self) -> Option<Arc<DashboardSnapshot>> {
        self.state.read().await.snapshot.clone()
    }

    /// Stat carousel items; empty until the first successful refresh.
    pub async fn stat_items(&self) -> Vec<StatItem> {
        self.state.read().await.stat_items.clone()
    }

    pub async fn stat_item(&self, row: usize) -> Option<StatItem> {
        self.state.read().await.stat_items.get(row).cloned()
    }

    pub async fn link_count(&self, mode: LinkSelectionMode) -> usize {
        self.state
            .read()
            .await
            .snapshot
            .as_ref()
            .map(|s| s.links(mode).len())
            .unwrap_or(0)
    }

    pub async fn link_at(&self, mode: LinkSelectionMode, row: usize) -> Option<LinkSummary> {
        self.state
            .read()
            .await
            .snapshot
            .as_ref()
            .and_then(|s| s.links(mode).get(row).cloned())
    }

    pub async fn links(&self, mode: LinkSelectionMode) -> Vec<LinkSummary> {
        self.state
            .read()
            .await
            .snapshot
            .as_ref()
            .map(|s| s.links(mode).to_vec())
            .unwrap_or_default()
    }

    pub async fn chart_dataset(&self) -> ChartDataset {
        self.state
            .read()
            .await
            .snapshot
            .as_ref()
            .map(|s| s.chart_dataset())
            .unwrap_or_default()
    }
}
