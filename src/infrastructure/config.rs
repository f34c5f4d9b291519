use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::fmt;

use crate::domain::chart::SurfaceSize;

pub const DEFAULT_BASE_URL: &str = "https://api.inopenapp.com";
pub const DASHBOARD_PATH: &str = "/api/v1/dashboardNew";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub server: ServerSettings,
    pub chart: ChartSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub token: String,
}

impl ApiSettings {
    pub fn dashboard_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), DASHBOARD_PATH)
    }
}

// Keep the bearer token out of logs
impl fmt::Debug for ApiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiSettings")
            .field("base_url", &self.base_url)
            .field("token", &mask(&self.token))
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartSettings {
    pub width: f64,
    pub height: f64,
}

impl ChartSettings {
    pub fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::new(self.width, self.height)
    }
}

/// Layered settings: built-in defaults, then `config/dashboard.*`, then
/// `DASHBOARD__SECTION__KEY` environment variables.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = with_defaults(config::Config::builder())?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("api.base_url", DEFAULT_BASE_URL)?
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("chart.width", 320.0)?
        .set_default("chart.height", 200.0)
}

fn mask(secret: &str) -> String {
    let visible: String = secret
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let hidden = secret.chars().count().saturating_sub(4);
    format!("{}{}", "*".repeat(hidden), visible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn load_from_toml(toml: &str) -> Result<AppConfig, ConfigError> {
        with_defaults(config::Config::builder())?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config = load_from_toml("[api]\ntoken = \"abc\"\n").unwrap();

        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.chart.surface_size(), SurfaceSize::new(320.0, 200.0));
    }

    #[test]
    fn test_token_is_required() {
        assert!(load_from_toml("[server]\nbind = \"127.0.0.1:9000\"\n").is_err());
    }

    #[test]
    fn test_dashboard_url() {
        let api = ApiSettings {
            base_url: "https://api.example.com/".to_string(),
            token: "secret".to_string(),
        };
        assert_eq!(api.dashboard_url(), "https://api.example.com/api/v1/dashboardNew");
    }

    #[test]
    fn test_debug_masks_token() {
        let api = ApiSettings {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: "supersecrettoken".to_string(),
        };
        let printed = format!("{:?}", api);
        assert!(!printed.contains("supersecrettoken"));
        assert!(printed.contains("************oken"));
    }
}
