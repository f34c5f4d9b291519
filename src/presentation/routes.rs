// Router assembly
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    chart_data, chart_svg, copy_link, get_dashboard, get_stat, health_check, link_thumbnail, list_links,
    list_stats, read_clipboard, refresh, toggle_links,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/stats", get(list_stats))
        .route("/stats/:row", get(get_stat))
        .route("/links", get(list_links))
        .route("/links/toggle", post(toggle_links))
        .route("/links/:row/copy", post(copy_link))
        .route("/links/:row/thumbnail", get(link_thumbnail))
        .route("/clipboard", get(read_clipboard))
        .route("/chart", get(chart_data))
        .route("/chart.svg", get(chart_svg))
        .route("/refresh", post(refresh))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_source::{DashboardSource, FetchError};
    use crate::application::dashboard_view_model::DashboardViewModel;
    use crate::application::image_loader::ImageLoader;
    use crate::domain::chart::SurfaceSize;
    use crate::domain::snapshot::{fixtures, DashboardSnapshot};
    use crate::presentation::clipboard::{ClipboardSink, MemoryClipboard};
    use crate::presentation::presenter::ScreenPresenter;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use bytes::Bytes;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    struct FixtureSource {
        snapshot: Option<DashboardSnapshot>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl DashboardSource for FixtureSource {
        async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.snapshot.clone().ok_or(FetchError::Status(503))
        }
    }

    struct FixedImageLoader;

    #[async_trait]
    impl ImageLoader for FixedImageLoader {
        async fn load(&self, url: &str) -> Option<Bytes> {
            url.ends_with("/200.png").then(|| Bytes::from_static(b"png-bytes"))
        }
    }

    struct TestApp {
        router: Router,
        source: Arc<FixtureSource>,
        clipboard: Arc<MemoryClipboard>,
    }

    async fn setup(snapshot: Option<DashboardSnapshot>, fetch_first: bool) -> TestApp {
        setup_at_hour(snapshot, fetch_first, || 9).await
    }

    async fn setup_at_hour(
        snapshot: Option<DashboardSnapshot>,
        fetch_first: bool,
        clock: fn() -> u32,
    ) -> TestApp {
        let source = Arc::new(FixtureSource {
            snapshot,
            calls: AtomicUsize::new(0),
        });
        let view_model = Arc::new(DashboardViewModel::new(source.clone()));
        let presenter = Arc::new(ScreenPresenter::new(SurfaceSize::new(300.0, 100.0)));
        view_model.subscribe(presenter.clone()).await;
        if fetch_first {
            view_model.refresh().await;
        }

        let clipboard = Arc::new(MemoryClipboard::new());
        let state = Arc::new(AppState::new(
            view_model,
            presenter,
            Arc::new(FixedImageLoader),
            clipboard.clone(),
            clock,
        ));

        TestApp {
            router: create_router(state),
            source,
            clipboard,
        }
    }

    async fn send(router: &Router, method: &str, uri: &str) -> (StatusCode, Bytes) {
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body)
    }

    fn json(body: &Bytes) -> Value {
        serde_json::from_slice(body).expect("Failed to parse JSON")
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = setup(None, false).await;
        let (status, body) = send(&app.router, "GET", "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_empty_screen_before_first_fetch() {
        let app = setup(None, false).await;

        let (status, body) = send(&app.router, "GET", "/stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body), serde_json::json!([]));

        let (status, body) = send(&app.router, "GET", "/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        let view = json(&body);
        assert_eq!(view["mode"], "top");
        assert_eq!(view["revision"], 0);
        assert_eq!(view["links"].as_array().unwrap().len(), 0);
        assert!(view["support_contact"].is_null());

        let (status, _) = send(&app.router, "GET", "/chart.svg").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_dashboard_view_after_fetch() {
        let app = setup(Some(fixtures::snapshot(3, 5)), true).await;

        let (_, body) = send(&app.router, "GET", "/dashboard").await;
        let view = json(&body);
        assert_eq!(view["revision"], 1);
        assert_eq!(view["stats"].as_array().unwrap().len(), 9);
        assert_eq!(view["stats"][0]["label"], "Extra Income");
        assert_eq!(view["links"].as_array().unwrap().len(), 3);
        assert_eq!(view["support_contact"], "+911234567890");
        assert_eq!(view["greeting"], "Good morning");

        let (status, body) = send(&app.router, "GET", "/stats/8").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body)["label"], "Applied Campaign");

        let (status, _) = send(&app.router, "GET", "/stats/9").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_greeting_follows_local_hour() {
        let afternoon = setup_at_hour(None, false, || 12).await;
        let (_, body) = send(&afternoon.router, "GET", "/dashboard").await;
        assert_eq!(json(&body)["greeting"], "Good afternoon");

        let evening = setup_at_hour(None, false, || 18).await;
        let (_, body) = send(&evening.router, "GET", "/dashboard").await;
        assert_eq!(json(&body)["greeting"], "Good evening");
    }

    #[tokio::test]
    async fn test_switching_link_lists_does_not_refetch() {
        let app = setup(Some(fixtures::snapshot(3, 5)), true).await;

        let (_, body) = send(&app.router, "GET", "/links").await;
        assert_eq!(json(&body)["count"], 3);
        assert_eq!(json(&body)["revision"], 1);

        let (_, body) = send(&app.router, "POST", "/links/toggle").await;
        let toggled = json(&body);
        assert_eq!(toggled["mode"], "recent");
        assert_eq!(toggled["count"], 5);

        let (_, body) = send(&app.router, "GET", "/links?mode=top").await;
        assert_eq!(json(&body)["count"], 3);

        let (_, body) = send(&app.router, "GET", "/links?mode=recent").await;
        let recent = json(&body);
        assert_eq!(recent["count"], 5);
        assert_eq!(recent["links"][0]["url_id"], 100);

        let (status, body) = send(&app.router, "GET", "/links?mode=popular").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(&body[..], b"unknown link selection mode: popular");

        let (status, body) = send(&app.router, "GET", "/links?mode=TOP").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body)["mode"], "top");

        assert_eq!(app.source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_copy_link_writes_web_link_to_clipboard() {
        let app = setup(Some(fixtures::snapshot(3, 5)), true).await;

        let (status, _) = send(&app.router, "GET", "/clipboard").await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app.router, "POST", "/links/1/copy").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"https://example.com/page/201");
        assert_eq!(
            app.clipboard.read_text().as_deref(),
            Some("https://example.com/page/201")
        );
        let (_, body) = send(&app.router, "GET", "/clipboard").await;
        assert_eq!(&body[..], b"https://example.com/page/201");

        // the top list only has three rows
        let (status, _) = send(&app.router, "POST", "/links/4/copy").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        send(&app.router, "POST", "/links/toggle").await;
        let (_, body) = send(&app.router, "POST", "/links/4/copy").await;
        assert_eq!(&body[..], b"https://example.com/page/104");
    }

    #[tokio::test]
    async fn test_thumbnail_is_loaded_through_image_loader() {
        let app = setup(Some(fixtures::snapshot(3, 5)), true).await;

        let response = app
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/links/0/thumbnail")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");

        let (status, _) = send(&app.router, "GET", "/links/1/thumbnail").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_chart_rendered_after_fetch() {
        let app = setup(Some(fixtures::snapshot(3, 5)), true).await;

        let (status, body) = send(&app.router, "GET", "/chart.svg").await;
        assert_eq!(status, StatusCode::OK);
        let svg = String::from_utf8(body.to_vec()).unwrap();
        assert!(svg.contains("<polyline"));

        let (_, body) = send(&app.router, "GET", "/chart").await;
        let keys: Vec<String> = json(&body)["points"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, ["2023-06-01", "2023-06-02", "2023-06-03"]);
    }

    #[tokio::test]
    async fn test_refresh_failure_is_silent() {
        let app = setup(None, false).await;

        let (status, _) = send(&app.router, "POST", "/refresh").await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(app.source.calls.load(Ordering::SeqCst), 1);

        let (_, body) = send(&app.router, "GET", "/stats").await;
        assert_eq!(json(&body), serde_json::json!([]));
    }
}
