use crate::application::chart_composer::ChartStyle;
use crate::application::dashboard_service::{EmptyChartPolicy, PresentationPolicy};
use crate::domain::chart::{LegendPlacement, Margin};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    pub source: SourceSettings,
    #[serde(default)]
    pub chart: ChartSettings,
    #[serde(default)]
    pub presentation: PresentationSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Where the dataset comes from. `url` wins when both are set.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SourceSettings {
    pub url: Option<String>,
    pub path: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChartSettings {
    pub title: String,
    pub x_title: String,
    pub left_title: String,
    pub right_title: String,
    pub height: u32,
    pub margin: Margin,
    pub legend: LegendPlacement,
    pub font_size: u32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        let style = ChartStyle::default();
        Self {
            title: style.title,
            x_title: style.x_title,
            left_title: style.left_title,
            right_title: style.right_title,
            height: style.height,
            margin: style.margin,
            legend: style.legend,
            font_size: style.font_size,
        }
    }
}

impl ChartSettings {
    pub fn to_style(&self) -> ChartStyle {
        ChartStyle {
            title: self.title.clone(),
            x_title: self.x_title.clone(),
            left_title: self.left_title.clone(),
            right_title: self.right_title.clone(),
            height: self.height,
            margin: self.margin,
            legend: self.legend,
            font_size: self.font_size,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PresentationSettings {
    pub on_all_empty: EmptyChartPolicy,
    pub zoom_enabled: bool,
    pub default_first_market: bool,
    pub empty_sentinel: String,
}

impl Default for PresentationSettings {
    fn default() -> Self {
        let policy = PresentationPolicy::default();
        Self {
            on_all_empty: policy.on_all_empty,
            zoom_enabled: policy.zoom_enabled,
            default_first_market: policy.default_first_market,
            empty_sentinel: policy.empty_sentinel,
        }
    }
}

impl PresentationSettings {
    pub fn to_policy(&self) -> PresentationPolicy {
        PresentationPolicy {
            on_all_empty: self.on_all_empty,
            zoom_enabled: self.zoom_enabled,
            default_first_market: self.default_first_market,
            empty_sentinel: self.empty_sentinel.clone(),
        }
    }
}

/// Load `config/dashboard.*`, overridden by `DASHBOARD__SECTION__KEY` variables.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
