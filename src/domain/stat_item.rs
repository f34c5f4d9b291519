// Stat carousel items derived from a snapshot
use serde::Serialize;

use super::snapshot::DashboardSnapshot;

pub const STAT_ITEM_COUNT: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatItem {
    pub label: String,
    pub value: String,
}

impl StatItem {
    pub fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }

    /// Build the nine carousel items in their fixed display order.
    pub fn from_snapshot(snapshot: &DashboardSnapshot) -> Vec<StatItem> {
        let items = vec![
            StatItem::new("Extra Income", format_amount(snapshot.extra_income)),
            StatItem::new("Total Links", snapshot.total_links.to_string()),
            StatItem::new("Total Clicks", snapshot.total_clicks.to_string()),
            StatItem::new("Today's Clicks", snapshot.today_clicks.to_string()),
            StatItem::new("Top Source", snapshot.top_source.clone()),
            StatItem::new("Top Location", snapshot.top_location.clone()),
            StatItem::new("Start Time", snapshot.start_time.clone()),
            StatItem::new("Links Created Today", snapshot.links_created_today.to_string()),
            StatItem::new("Applied Campaign", snapshot.applied_campaign.to_string()),
        ];
        debug_assert_eq!(items.len(), STAT_ITEM_COUNT);
        items
    }
}

/// Whole amounts keep a trailing ".0" so the carousel reads as a currency figure.
fn format_amount(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
