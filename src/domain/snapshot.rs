// Dashboard snapshot domain model (mirrors the dashboard endpoint payload)
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::chart::ChartDataset;
use super::link::LinkSelectionMode;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DashboardSnapshot {
    pub support_whatsapp_number: String,
    pub extra_income: f64,
    pub total_links: i64,
    pub total_clicks: i64,
    pub today_clicks: i64,
    pub top_source: String,
    pub top_location: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    pub links_created_today: i64,
    pub applied_campaign: i64,
    pub data: DashboardData,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DashboardData {
    #[serde(default)]
    pub recent_links: Option<Vec<LinkSummary>>,
    #[serde(default)]
    pub top_links: Option<Vec<LinkSummary>>,
    pub overall_url_chart: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LinkSummary {
    pub url_id: i64,
    pub web_link: String,
    pub smart_link: String,
    pub title: String,
    pub total_clicks: i64,
    pub original_image: String,
    pub thumbnail: Option<String>,
    pub times_ago: String,
    pub created_at: String,
    pub domain_id: String,
    pub url_prefix: Option<String>,
    pub url_suffix: String,
    pub app: String,
}

impl LinkSummary {
    /// Preferred image for a link row: the thumbnail when present, else the original image.
    pub fn preview_image(&self) -> Option<&str> {
        self.thumbnail
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(Some(self.original_image.as_str()).filter(|o| !o.is_empty()))
    }
}

impl DashboardSnapshot {
    /// Links for the given selection mode. An absent list is treated as empty.
    pub fn links(&self, mode: LinkSelectionMode) -> &[LinkSummary] {
        let list = match mode {
            LinkSelectionMode::Top => &self.data.top_links,
            LinkSelectionMode::Recent => &self.data.recent_links,
        };
        list.as_deref().unwrap_or(&[])
    }

    pub fn chart_dataset(&self) -> ChartDataset {
        ChartDataset::from(self.data.overall_url_chart.clone())
    }
}
