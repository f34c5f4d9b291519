// HTTP request handlers
use crate::domain::chart::ChartDataset;
use crate::domain::greeting::greeting_for_hour;
use crate::domain::link::LinkSelectionMode;
use crate::domain::snapshot::LinkSummary;
use crate::domain::stat_item::StatItem;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct LinkQuery {
    pub mode: Option<String>,
}

#[derive(Serialize)]
pub struct DashboardView {
    pub greeting: &'static str,
    pub revision: u64,
    pub support_contact: Option<String>,
    pub stats: Vec<StatItem>,
    pub mode: LinkSelectionMode,
    pub links: Vec<LinkSummary>,
}

#[derive(Serialize)]
pub struct LinkListView {
    pub mode: LinkSelectionMode,
    pub revision: u64,
    pub count: usize,
    pub links: Vec<LinkSummary>,
}

#[derive(Serialize)]
pub struct LinkModeView {
    pub mode: LinkSelectionMode,
    pub count: usize,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Whole screen: greeting, stat carousel and the currently selected link list
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    let mode = state.current_mode().await;
    let snapshot = state.view_model.snapshot().await;

    Json(DashboardView {
        greeting: greeting_for_hour((state.clock)()),
        revision: state.presenter.stat_list_reloads(),
        support_contact: snapshot.map(|s| s.support_whatsapp_number.clone()),
        stats: state.view_model.stat_items().await,
        mode,
        links: state.view_model.links(mode).await,
    })
}

/// Stat carousel items, empty until data has been fetched
pub async fn list_stats(State(state): State<Arc<AppState>>) -> Json<Vec<StatItem>> {
    Json(state.view_model.stat_items().await)
}

/// Single carousel item
pub async fn get_stat(
    Path(row): Path<usize>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatItem>, StatusCode> {
    state
        .view_model
        .stat_item(row)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Links for the selected mode; `?mode=` switches the selection first
pub async fn list_links(
    Query(query): Query<LinkQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<LinkListView>, (StatusCode, String)> {
    let mode = match query.mode.as_deref() {
        Some(raw) => {
            let mode = raw
                .parse::<LinkSelectionMode>()
                .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
            *state.selection.write().await = mode;
            mode
        }
        None => state.current_mode().await,
    };

    let links = state.view_model.links(mode).await;
    Ok(Json(LinkListView {
        mode,
        revision: state.presenter.link_list_reloads(),
        count: links.len(),
        links,
    }))
}

/// Flip between top and recent links
pub async fn toggle_links(State(state): State<Arc<AppState>>) -> Json<LinkModeView> {
    let mode = {
        let mut selection = state.selection.write().await;
        *selection = selection.toggle();
        *selection
    };
    tracing::debug!("Link selection switched to {}", mode);

    Json(LinkModeView {
        mode,
        count: state.view_model.link_count(mode).await,
    })
}

/// Copy the web URL of a row in the current list to the clipboard
pub async fn copy_link(
    Path(row): Path<usize>,
    State(state): State<Arc<AppState>>,
) -> Result<String, StatusCode> {
    let link = link_at_row(&state, row).await.ok_or(StatusCode::NOT_FOUND)?;

    state.clipboard.write_text(&link.web_link);
    Ok(link.web_link)
}

/// Most recently copied text; 204 when nothing has been copied yet
pub async fn read_clipboard(State(state): State<Arc<AppState>>) -> Result<String, StatusCode> {
    state.clipboard.read_text().ok_or(StatusCode::NO_CONTENT)
}

/// Thumbnail for a link row, proxied through the image loader
pub async fn link_thumbnail(
    Path(row): Path<usize>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, StatusCode> {
    let link = link_at_row(&state, row).await.ok_or(StatusCode::NOT_FOUND)?;
    let url = link.preview_image().ok_or(StatusCode::NOT_FOUND)?;

    let bytes = state
        .image_loader
        .load(url)
        .await
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(([(header::CONTENT_TYPE, image_content_type(url))], bytes))
}

/// Chart points keyed by date, in key order
pub async fn chart_data(State(state): State<Arc<AppState>>) -> Json<ChartDataset> {
    Json(state.view_model.chart_dataset().await)
}

/// Last rendered chart
pub async fn chart_svg(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, StatusCode> {
    let svg = state.presenter.chart_svg().ok_or(StatusCode::NOT_FOUND)?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}

/// Re-run the dashboard fetch. Failures are not surfaced.
pub async fn refresh(State(state): State<Arc<AppState>>) -> StatusCode {
    let outcome = state.view_model.refresh().await;
    tracing::debug!("Manual refresh finished: {:?}", outcome);
    StatusCode::NO_CONTENT
}

async fn link_at_row(state: &AppState, row: usize) -> Option<LinkSummary> {
    let mode = state.current_mode().await;
    state.view_model.link_at(mode, row).await
}

fn image_content_type(url: &str) -> &'static str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
